use leptos::prelude::*;

use crate::state::{AppState, Output};

#[component]
pub fn OutputPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section class="output-panel">
            {move || match state.output.get() {
                Output::Idle => {
                    view! { <div class="output empty-state">"Results will appear here"</div> }
                        .into_any()
                }
                Output::Loading(label) => {
                    view! { <div class="output loading">{label}</div> }.into_any()
                }
                // Already escaped by `render`.
                Output::Rendered(markup) => {
                    view! { <div class="output" inner_html=markup></div> }.into_any()
                }
                Output::Message(text) => {
                    view! { <div class="output error">{text}</div> }.into_any()
                }
            }}
        </section>
    }
}
