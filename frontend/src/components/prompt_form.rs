use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

/// Free-text field and submit button.
#[component]
pub fn PromptForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let translating = move || state.selection.get().is_translate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <form class="prompt-form" on:submit=on_submit>
            <input
                type="text"
                class="prompt-input"
                placeholder=move || {
                    if translating() { "Text to translate into English…" } else { "Ask anything…" }
                }
                prop:value=move || state.input.get()
                on:input=move |ev| state.set_input.set(event_target_value(&ev))
            />
            <button type="submit" class="send-btn">
                {move || if translating() { "Translate" } else { "Send" }}
            </button>
        </form>
    }
}
