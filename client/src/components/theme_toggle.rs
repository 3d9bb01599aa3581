//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_toggle = move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));

    view! {
        <button class="theme-toggle" type="button" aria-label="Toggle theme" on:click=on_toggle>
            {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
        </button>
    }
}
