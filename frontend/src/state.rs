use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, DisplayResult};
use crate::composer::{compute_effective_prompt, EffectivePrompt, Mode, SelectionState};

pub const NO_INPUT_MESSAGE: &str = "Please provide input: type a prompt or pick a quick prompt";

/// What the output panel currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Idle,
    Loading(&'static str),
    /// Sanitized markup.
    Rendered(String),
    /// Plain text, shown as-is.
    Message(String),
}

impl From<DisplayResult> for Output {
    fn from(result: DisplayResult) -> Self {
        match result {
            DisplayResult::Rendered(markup) => Output::Rendered(markup),
            DisplayResult::Error(text) => Output::Message(text),
        }
    }
}

fn loading_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Generate => "Loading...",
        Mode::Translate => "Translating...",
    }
}

/// Page state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub selection: ReadSignal<SelectionState>,
    pub input: ReadSignal<String>,
    pub output: ReadSignal<Output>,

    // --- Write signals (for mutating state) ---
    pub set_selection: WriteSignal<SelectionState>,
    pub set_input: WriteSignal<String>,
    pub set_output: WriteSignal<Output>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (selection, set_selection) = signal(SelectionState::new());
        let (input, set_input) = signal(String::new());
        let (output, set_output) = signal(Output::Idle);

        let state = Self {
            selection,
            input,
            output,
            set_selection,
            set_input,
            set_output,
        };

        provide_context(state);
        state
    }

    /// Quick-prompt button click.
    pub fn toggle(&self, token: &str) {
        self.set_selection.update(|s| s.toggle(token));
    }

    /// Form submit. Overlapping submits are not guarded: whichever response
    /// resolves last owns the output panel.
    pub fn submit(&self) {
        let selection = self.selection.get_untracked();
        let text = self.input.get_untracked();

        let (mode, operand) = match compute_effective_prompt(&selection, &text) {
            EffectivePrompt::NoInput => {
                log::warn!("Submit with no input");
                self.set_output.set(Output::Message(NO_INPUT_MESSAGE.to_string()));
                return;
            }
            EffectivePrompt::Ready { mode, operand } => (mode, operand),
        };

        log::debug!("Submitting {mode:?} request ({} chars)", operand.len());
        self.set_output.set(Output::Loading(loading_label(mode)));

        let set_output = self.set_output;
        spawn_local(async move {
            let result = api::submit(mode, &operand).await;
            set_output.set(result.into());
        });
    }
}
