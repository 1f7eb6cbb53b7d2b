use std::sync::Arc;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde_json::{json, Value};
use tracing::error;

use crate::AppState;
use crate::handlers::email_dtos::EmailRequest;
use crate::utils::email_templates;

const CLIENT_FROM: &str = "La Petite Vitrine <noreply@lapetitevitrine.com>";
const INTERNAL_FROM: &str = "Formulaire Web <noreply@lapetitevitrine.com>";

fn internal_address() -> String {
    std::env::var("INTERNAL_EMAIL")
        .unwrap_or_else(|_| "contact@lapetitevitrine.com".to_string())
}

/// POST /api/send-email: renders the confirmation and internal
/// notification for the submitted form record and sends both through
/// the email provider, reporting a single aggregate outcome.
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(data): Json<EmailRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if data.email.trim().is_empty()
        || data.first_name.trim().is_empty()
        || data.last_name.trim().is_empty()
    {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Données manquantes"})),
        ));
    }

    let is_order = data.request_type == "quote";

    let client_subject = if is_order {
        "Confirmation de votre commande - La Petite Vitrine"
    } else {
        "Confirmation de votre demande - La Petite Vitrine"
    };
    let client_html = if is_order {
        email_templates::order_confirmation(&data)
    } else {
        email_templates::information_confirmation(&data)
    };

    let internal_subject = if is_order {
        format!("Nouvelle commande de {} {}", data.first_name, data.last_name)
    } else {
        format!(
            "Nouvelle demande d'information de {} {}",
            data.first_name, data.last_name
        )
    };
    let internal_html = if is_order {
        email_templates::internal_order(&data)
    } else {
        email_templates::internal_information(&data)
    };

    let internal_to = internal_address();
    let (client_sent, internal_sent) = tokio::join!(
        state
            .mailer
            .send(CLIENT_FROM, &data.email, client_subject, &client_html),
        state
            .mailer
            .send(INTERNAL_FROM, &internal_to, &internal_subject, &internal_html),
    );

    match (client_sent, internal_sent) {
        (Ok(client_id), Ok(internal_id)) => Ok(Json(json!({
            "success": true,
            "message": "Emails envoyés avec succès",
            "clientEmailId": client_id,
            "internalEmailId": internal_id,
        }))),
        (client_sent, internal_sent) => {
            if let Err(e) = client_sent {
                error!("client confirmation email failed: {:?}", e);
            }
            if let Err(e) = internal_sent {
                error!("internal notification email failed: {:?}", e);
            }
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Erreur lors de l'envoi des emails"})),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mailer::Mailer;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct SentEmail {
        to: String,
        subject: String,
        html: String,
    }

    /// Records every send; fails any send addressed to `fail_to`.
    struct StubMailer {
        sent: Mutex<Vec<SentEmail>>,
        fail_to: Option<String>,
    }

    impl StubMailer {
        fn ok() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_to: None,
            }
        }

        fn failing_for(to: &str) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_to: Some(to.to_string()),
            }
        }
    }

    #[async_trait]
    impl Mailer for StubMailer {
        async fn send(&self, _from: &str, to: &str, subject: &str, html: &str)
            -> anyhow::Result<String>
        {
            if self.fail_to.as_deref() == Some(to) {
                return Err(anyhow!("provider rejected {}", to));
            }
            let mut sent = self.sent.lock().unwrap();
            sent.push(SentEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                html: html.to_string(),
            });
            Ok(format!("id-{}", sent.len()))
        }
    }

    fn state_with(mailer: StubMailer) -> (Arc<AppState>, Arc<StubMailer>) {
        let mailer = Arc::new(mailer);
        let state = Arc::new(AppState {
            mailer: mailer.clone(),
        });
        (state, mailer)
    }

    fn information_body() -> EmailRequest {
        serde_json::from_value(json!({
            "requestType": "information",
            "firstName": "Paul",
            "lastName": "Martin",
            "email": "paul@exemple.fr",
            "subject": "tarifs",
            "message": "Quels sont vos tarifs ?"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn empty_body_is_rejected_with_missing_data() {
        let (state, mailer) = state_with(StubMailer::ok());
        let body: EmailRequest = serde_json::from_value(json!({})).unwrap();

        let err = send_email(State(state), Json(body)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert_eq!(err.1 .0, json!({"error": "Données manquantes"}));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn information_request_sends_both_emails() {
        let (state, mailer) = state_with(StubMailer::ok());

        let resp = send_email(State(state), Json(information_body()))
            .await
            .unwrap();
        assert_eq!(resp.0["success"], json!(true));
        assert!(resp.0["clientEmailId"].is_string());
        assert!(resp.0["internalEmailId"].is_string());

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        let client = sent.iter().find(|e| e.to == "paul@exemple.fr").unwrap();
        assert_eq!(
            client.subject,
            "Confirmation de votre demande - La Petite Vitrine"
        );
        assert!(client.html.contains("Quels sont vos tarifs ?"));
        let internal = sent
            .iter()
            .find(|e| e.to == "contact@lapetitevitrine.com")
            .unwrap();
        assert_eq!(
            internal.subject,
            "Nouvelle demande d'information de Paul Martin"
        );
    }

    #[tokio::test]
    async fn quote_request_uses_order_templates() {
        let (state, mailer) = state_with(StubMailer::ok());
        let body: EmailRequest = serde_json::from_value(json!({
            "requestType": "quote",
            "firstName": "Marie",
            "lastName": "Durand",
            "email": "marie@exemple.fr",
            "businessName": "Menuiserie Durand",
            "activity": "Menuiserie",
            "city": "Lyon",
            "projectType": "site-vitrine",
            "budget": "1000-3000",
            "timeline": "1-2-mois",
            "sections": {"about": true, "contactForm": true}
        }))
        .unwrap();

        let resp = send_email(State(state), Json(body)).await.unwrap();
        assert_eq!(resp.0["success"], json!(true));

        let sent = mailer.sent.lock().unwrap();
        let client = sent.iter().find(|e| e.to == "marie@exemple.fr").unwrap();
        assert_eq!(
            client.subject,
            "Confirmation de votre commande - La Petite Vitrine"
        );
        let internal = sent
            .iter()
            .find(|e| e.to == "contact@lapetitevitrine.com")
            .unwrap();
        assert_eq!(internal.subject, "Nouvelle commande de Marie Durand");
        assert!(internal.html.contains("<li>À propos</li>"));
        assert!(internal.html.contains("<li>Formulaire de contact</li>"));
        assert!(!internal.html.contains("<li>Portfolio</li>"));
    }

    #[tokio::test]
    async fn one_failing_send_yields_a_failure_envelope() {
        // Internal send fails; no partial success is reported.
        let (state, _mailer) = state_with(StubMailer::failing_for("contact@lapetitevitrine.com"));

        let err = send_email(State(state), Json(information_body()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.1 .0,
            json!({"error": "Erreur lors de l'envoi des emails"})
        );
    }
}
