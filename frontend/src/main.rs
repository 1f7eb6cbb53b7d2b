use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact {
    pub mod confirmation_step;
    pub mod contact_form;
    pub mod contact_info_step;
    pub mod fields;
    pub mod form_state;
    pub mod information_request_step;
    pub mod project_details_step;
    pub mod quote_request_step;
    pub mod request_type_step;
    pub mod step_indicator;
    pub mod summary_step;
    pub mod types;
}
mod pages {
    pub mod home;
}

use contact::contact_form::ContactForm;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Contact => html! { <ContactForm /> },
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    html! {
        <nav>
            <style>
                {r#"
                    nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 2rem;
                        background: rgba(253, 246, 240, 0.9);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid rgba(201, 100, 90, 0.1);
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.2rem;
                        color: #C9645A;
                        text-decoration: none;
                    }
                    .nav-links { display: flex; gap: 1.5rem; }
                    .nav-links a {
                        color: #3a3a3a;
                        text-decoration: none;
                        font-size: 0.95rem;
                    }
                    .nav-links a:hover { color: #C9645A; }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="nav-logo">
                { "La Petite Vitrine" }
            </Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::Home}>{ "Accueil" }</Link<Route>>
                <Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to init logging");
    yew::Renderer::<App>::new().render();
}
