use crate::handlers::email_dtos::EmailRequest;

/// Confirmation envoyée au client pour une demande d'information.
pub fn information_confirmation(data: &EmailRequest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Confirmation de votre demande</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: #C9645A;">Merci pour votre demande d'information !</h1>

    <p>Bonjour {first_name},</p>

    <p>Nous avons bien reçu votre demande d'information et nous vous remercions de votre intérêt pour nos services.</p>

    <div style="background: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Récapitulatif de votre demande :</h3>
      <p><strong>Sujet :</strong> {subject}</p>
      <p><strong>Message :</strong> {message}</p>
    </div>

    <p>Notre équipe vous répondra dans les plus brefs délais, généralement sous 24h.</p>

    <p>Cordialement,<br>L'équipe La Petite Vitrine</p>

    <hr style="margin: 30px 0; border: none; border-top: 1px solid #eee;">
    <p style="font-size: 12px; color: #666;">
      La Petite Vitrine - Votre présence numérique clé en main<br>
      Email: contact@lapetitevitrine.com
    </p>
  </div>
</body>
</html>
"#,
        first_name = data.first_name,
        subject = data.subject,
        message = data.message,
    )
}

/// Confirmation envoyée au client pour une commande de site web.
pub fn order_confirmation(data: &EmailRequest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Confirmation de votre commande</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: #C9645A;">Merci pour votre commande !</h1>

    <p>Bonjour {first_name},</p>

    <p>Nous avons bien reçu votre commande pour la création de votre site web et nous vous remercions de votre confiance.</p>

    <div style="background: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Récapitulatif de votre projet :</h3>
      <p><strong>Entreprise :</strong> {business_name}</p>
      <p><strong>Activité :</strong> {activity}</p>
      <p><strong>Ville :</strong> {city}</p>
      <p><strong>Type de projet :</strong> {project_type}</p>
      <p><strong>Budget :</strong> {budget}</p>
      <p><strong>Délai souhaité :</strong> {timeline}</p>
    </div>

    <h3>Prochaines étapes :</h3>
    <ol>
      <li>Notre équipe va analyser votre demande (24-48h)</li>
      <li>Nous vous contacterons pour finaliser les détails</li>
      <li>Création de votre site en 5 jours ouvrés</li>
    </ol>

    <p>Nous vous recontacterons très prochainement pour démarrer votre projet.</p>

    <p>Cordialement,<br>L'équipe La Petite Vitrine</p>

    <hr style="margin: 30px 0; border: none; border-top: 1px solid #eee;">
    <p style="font-size: 12px; color: #666;">
      La Petite Vitrine - Votre présence numérique clé en main<br>
      Email: contact@lapetitevitrine.com
    </p>
  </div>
</body>
</html>
"#,
        first_name = data.first_name,
        business_name = data.business_name,
        activity = data.activity,
        city = data.city,
        project_type = data.project_type,
        budget = data.budget,
        timeline = data.timeline,
    )
}

/// Notification interne pour une demande d'information.
pub fn internal_information(data: &EmailRequest) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Nouvelle demande d'information</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: #C9645A;">Nouvelle demande d'information</h1>

    <div style="background: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Informations du contact :</h3>
      <p><strong>Nom :</strong> {first_name} {last_name}</p>
      <p><strong>Email :</strong> {email}</p>
      <p><strong>Téléphone :</strong> {phone}</p>
      <p><strong>Entreprise :</strong> {company}</p>
    </div>

    <div style="background: #f0f9ff; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Message :</h3>
      <p><strong>Sujet :</strong> {subject}</p>
      <p><strong>Message :</strong></p>
      <p style="white-space: pre-wrap;">{message}</p>
    </div>
  </div>
</body>
</html>
"#,
        first_name = data.first_name,
        last_name = data.last_name,
        email = data.email,
        phone = data.phone,
        company = data.company,
        subject = data.subject,
        message = data.message,
    )
}

/// Notification interne pour une commande. Les sections cochées sont
/// rendues en liste; description et informations supplémentaires
/// n'apparaissent que si elles sont renseignées.
pub fn internal_order(data: &EmailRequest) -> String {
    let mut sections_list = String::new();
    if data.sections.about {
        sections_list.push_str("<li>À propos</li>");
    }
    if data.sections.services {
        sections_list.push_str("<li>Services</li>");
    }
    if data.sections.portfolio {
        sections_list.push_str("<li>Portfolio</li>");
    }
    if data.sections.practical_info {
        sections_list.push_str("<li>Informations pratiques</li>");
    }
    if data.sections.contact_form {
        sections_list.push_str("<li>Formulaire de contact</li>");
    }

    let description_block = if data.description.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Description :</strong> {}</p>",
            data.description
        )
    };
    let additional_info_block = if data.additional_info.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Informations supplémentaires :</strong> {}</p>",
            data.additional_info
        )
    };

    let current_website = if data.current_website.is_empty() {
        "Aucun"
    } else {
        &data.current_website
    };
    let urgent = if data.urgent_project { "Oui" } else { "Non" };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Nouvelle commande de site web</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="color: #C9645A;">Nouvelle commande de site web</h1>

    <div style="background: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Informations du client :</h3>
      <p><strong>Nom :</strong> {first_name} {last_name}</p>
      <p><strong>Email :</strong> {email}</p>
      <p><strong>Téléphone :</strong> {phone}</p>
      <p><strong>Entreprise :</strong> {company}</p>
    </div>

    <div style="background: #f0f9ff; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Détails du projet :</h3>
      <p><strong>Nom de l'entreprise :</strong> {business_name}</p>
      <p><strong>Activité :</strong> {activity}</p>
      <p><strong>Ville :</strong> {city}</p>
      <p><strong>Code postal :</strong> {postal_code}</p>
      <p><strong>Cible :</strong> {target_audience}</p>
      <p><strong>Site actuel :</strong> {current_website}</p>
    </div>

    <div style="background: #fff7ed; padding: 15px; border-radius: 5px; margin: 20px 0;">
      <h3>Spécifications :</h3>
      <p><strong>Type de projet :</strong> {project_type}</p>
      <p><strong>Budget :</strong> {budget}</p>
      <p><strong>Délai :</strong> {timeline}</p>
      <p><strong>Projet urgent :</strong> {urgent}</p>

      <h4>Sections souhaitées :</h4>
      <ul>
        {sections_list}
      </ul>

      {description_block}
      {additional_info_block}
    </div>
  </div>
</body>
</html>
"#,
        first_name = data.first_name,
        last_name = data.last_name,
        email = data.email,
        phone = data.phone,
        company = data.company,
        business_name = data.business_name,
        activity = data.activity,
        city = data.city,
        postal_code = data.postal_code,
        target_audience = data.target_audience,
        current_website = current_website,
        project_type = data.project_type,
        budget = data.budget,
        timeline = data.timeline,
        urgent = urgent,
        sections_list = sections_list,
        description_block = description_block,
        additional_info_block = additional_info_block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::email_dtos::EmailRequest;

    fn quote_request() -> EmailRequest {
        let mut data = EmailRequest::default();
        data.request_type = "quote".to_string();
        data.first_name = "Marie".to_string();
        data.last_name = "Durand".to_string();
        data.email = "marie@exemple.fr".to_string();
        data.business_name = "Menuiserie Durand".to_string();
        data.activity = "Menuiserie".to_string();
        data.city = "Lyon".to_string();
        data.project_type = "site-vitrine".to_string();
        data.budget = "1000-3000".to_string();
        data.timeline = "1-2-mois".to_string();
        data
    }

    #[test]
    fn internal_order_lists_only_checked_sections() {
        let mut data = quote_request();
        data.sections.portfolio = true;
        data.sections.contact_form = true;

        let html = internal_order(&data);
        assert!(html.contains("<li>Portfolio</li>"));
        assert!(html.contains("<li>Formulaire de contact</li>"));
        assert!(!html.contains("<li>À propos</li>"));
        assert!(!html.contains("<li>Services</li>"));
        assert!(!html.contains("<li>Informations pratiques</li>"));
    }

    #[test]
    fn internal_order_skips_empty_optional_blocks() {
        let data = quote_request();
        let html = internal_order(&data);
        assert!(!html.contains("Description :"));
        assert!(!html.contains("Informations supplémentaires :"));
        assert!(html.contains("<strong>Site actuel :</strong> Aucun"));
        assert!(html.contains("<strong>Projet urgent :</strong> Non"));
    }

    #[test]
    fn internal_order_renders_optional_blocks_when_present() {
        let mut data = quote_request();
        data.description = "Un site pour présenter l'atelier".to_string();
        data.additional_info = "Logo déjà existant".to_string();
        data.current_website = "https://ancien-site.fr".to_string();
        data.urgent_project = true;

        let html = internal_order(&data);
        assert!(html.contains("Un site pour présenter l'atelier"));
        assert!(html.contains("Logo déjà existant"));
        assert!(html.contains("https://ancien-site.fr"));
        assert!(html.contains("<strong>Projet urgent :</strong> Oui"));
    }

    #[test]
    fn order_confirmation_restates_project_fields() {
        let data = quote_request();
        let html = order_confirmation(&data);
        assert!(html.contains("Bonjour Marie,"));
        assert!(html.contains("Menuiserie Durand"));
        assert!(html.contains("site-vitrine"));
        assert!(html.contains("Création de votre site en 5 jours ouvrés"));
    }

    #[test]
    fn information_confirmation_restates_subject_and_message() {
        let mut data = EmailRequest::default();
        data.first_name = "Paul".to_string();
        data.subject = "tarifs".to_string();
        data.message = "Quels sont vos tarifs ?".to_string();

        let html = information_confirmation(&data);
        assert!(html.contains("Bonjour Paul,"));
        assert!(html.contains("<strong>Sujet :</strong> tarifs"));
        assert!(html.contains("Quels sont vos tarifs ?"));
    }
}
