use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 4rem 1rem;
                        background: linear-gradient(135deg, #fdf6f0, #f3e8e2);
                        color: #3a3a3a;
                    }
                    .hero { max-width: 640px; }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        background: rgba(201, 100, 90, 0.12);
                        color: #C9645A;
                        font-size: 0.9rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: 2.8rem;
                        line-height: 1.15;
                        margin: 0 0 1rem;
                    }
                    .hero h1 span { color: #C9645A; }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: #8a7a72;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 0.9rem 2.5rem;
                        background: #C9645A;
                        color: #fff;
                        border-radius: 999px;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                    .hero-points {
                        margin-top: 2rem;
                        color: #8a7a72;
                        font-size: 0.95rem;
                    }
                "#}
            </style>
            <div class="hero">
                <span class="hero-badge">{ "Site web + hébergement + maintenance" }</span>
                <h1>{ "Vitrine numérique des " }<span>{ "artisans" }</span></h1>
                <p class="hero-subtitle">
                    { "Votre présence numérique complète et clé en main. \
                       Un site professionnel livré en 5 jours ouvrés, sans aucune \
                       compétence technique requise." }
                </p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    { "Commander mon site" }
                </Link<Route>>
                <p class="hero-points">
                    { "Paiement mensuel sans engagement · Mises à jour incluses · Support en français" }
                </p>
            </div>
        </div>
    }
}
