mod api;
mod components;
mod composer;
mod models;
mod render;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::output::OutputPanel;
use components::prompt_form::PromptForm;
use components::quick_prompts::QuickPromptBar;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <main class="app-container">
            <h1>"Prompt Relay"</h1>
            <QuickPromptBar />
            <PromptForm />
            <OutputPanel />
        </main>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
