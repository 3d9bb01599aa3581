//! Root layout: HTML shell, context providers, and routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::{auth_effects::refresh_session, dark_mode};

pub const APP_DESCRIPTION: &str = "Chatbot with email and password sign-in.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1"/>
                <meta name="description" content=APP_DESCRIPTION/>
                <meta name="theme-color" content=dark_mode::theme_color(false)/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, session, and notification contexts, loads the
/// session once on mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, so SSR renders the light theme and a
    // loading session.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        refresh_session(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chatbot-web.css"/>
        <Title text="Chatbot"/>

        <Toaster/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
