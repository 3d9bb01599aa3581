//! Register page: account creation with email + password.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_form::AuthForm;
use crate::components::submit_button::SubmitButton;
use crate::net::types::AuthFlow;
use crate::pages::auth_action::use_auth_action;
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    let flow = AuthFlow::Register;
    let action = use_auth_action(flow);

    view! {
        <main class="auth-page">
            <section class="auth-card" aria-labelledby="auth-heading">
                <h1 id="auth-heading">"Create an account"</h1>
                <p class="auth-card__subtitle">"Fill in your details to get started"</p>
                <AuthForm default_email=action.email on_submit=action.on_submit>
                    <SubmitButton control=action.control>"Sign up"</SubmitButton>
                </AuthForm>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=flow.other().route()>"Sign in"</a>
                </p>
            </section>
        </main>
    }
}
