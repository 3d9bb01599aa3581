//! Login page: email + password sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::components::submit_button::SubmitButton;
use crate::net::types::AuthFlow;
use crate::pages::auth_action::use_auth_action;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

/// Login page. Signed-in visitors are sent home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    let flow = AuthFlow::Login;
    let action = use_auth_action(flow);

    view! {
        <main class="auth-page">
            <section class="auth-card" aria-labelledby="auth-heading">
                <h1 id="auth-heading">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account to continue"</p>
                <AuthForm default_email=action.email on_submit=action.on_submit>
                    <SubmitButton control=action.control>"Sign in"</SubmitButton>
                </AuthForm>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=flow.other().route()>"Sign up for free"</a>
                </p>
            </section>
        </main>
    }
}
