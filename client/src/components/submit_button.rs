//! Submit button reflecting pending and success state.

#[cfg(test)]
#[path = "submit_button_test.rs"]
mod submit_button_test;

use leptos::prelude::*;

use crate::state::submission::SubmitControl;

/// While pending the button is demoted to `type="button"` so a second
/// Enter press cannot re-submit the form.
fn button_type(control: SubmitControl) -> &'static str {
    if control == SubmitControl::Pending { "button" } else { "submit" }
}

#[component]
pub fn SubmitButton(#[prop(into)] control: Signal<SubmitControl>, children: Children) -> impl IntoView {
    let busy = move || !control.get().is_interactive();

    view! {
        <button
            class="submit-button"
            type=move || button_type(control.get())
            disabled=busy
            aria-disabled=move || busy().to_string()
        >
            <span class="submit-button__label" class:submit-button__label--busy=busy>
                {children()}
            </span>
            <Show when=move || control.get().shows_spinner()>
                <span class="submit-button__spinner" aria-hidden="true"></span>
            </Show>
            <output aria-live="polite" class="sr-only">
                {move || control.get().live_label()}
            </output>
        </button>
    }
}
