use leptos::prelude::*;

use crate::composer::{QUICK_PROMPTS, TRANSLATE};
use crate::state::AppState;

/// Row of toggle buttons, one per quick prompt.
#[component]
pub fn QuickPromptBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="quick-prompts">
            {QUICK_PROMPTS
                .iter()
                .map(|&token| {
                    view! {
                        <button
                            type="button"
                            class="quick-prompt"
                            class:translate={token == TRANSLATE}
                            class:active=move || state.selection.get().contains(token)
                            on:click=move |_| state.toggle(token)
                        >
                            {token}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
