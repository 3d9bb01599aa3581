//! Email + password form shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form only captures fields and forwards them; semantic validation is
//! the action endpoint's job. HTML `required`/`type` constraints are the only
//! client-side checks.

use leptos::prelude::*;

use crate::net::types::AuthFields;

/// Form shell. `default_email` re-seeds the email input so a failed attempt
/// keeps what the user typed. Children render the submit control.
#[component]
pub fn AuthForm(
    #[prop(into)] default_email: Signal<String>,
    on_submit: Callback<AuthFields>,
    children: Children,
) -> impl IntoView {
    let email = RwSignal::new(default_email.get_untracked());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    Effect::new(move || email.set(default_email.get()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = AuthFields::new(&email.get_untracked(), &password.get_untracked(), remember.get_untracked());
        on_submit.run(fields);
    };

    view! {
        <form class="auth-form" on:submit=on_form_submit>
            <div class="auth-form__field">
                <label class="sr-only" for="email">"Email address"</label>
                <input
                    id="email"
                    name="email"
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    required=true
                    autofocus=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="auth-form__field">
                <label class="sr-only" for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <label class="auth-form__remember">
                <input
                    type="checkbox"
                    name="remember"
                    prop:checked=move || remember.get()
                    on:change=move |ev| remember.set(event_target_checked(&ev))
                />
                "Remember me"
            </label>
            <div class="auth-form__actions">{children()}</div>
        </form>
    }
}
