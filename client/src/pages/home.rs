//! Authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Successful sign-in lands here once the session provider reports a user.
//! Signed-out visitors are redirected to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let display_name = move || auth.get().user.map(|u| u.display_name().to_owned()).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            crate::util::auth_effects::refresh_session(auth);
        });
    };

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <span class="home-page__user">{display_name}</span>
                <ThemeToggle/>
                <button class="home-page__logout" type="button" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <p class="home-page__loading">"Loading..."</p> }
            >
                <p class="home-page__welcome">"You are signed in."</p>
            </Show>
        </main>
    }
}
