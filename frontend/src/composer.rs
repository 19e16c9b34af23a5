//! Quick-prompt selection and derivation of the request to send.

/// Reserved token that switches the page into translation mode.
pub const TRANSLATE: &str = "Translate";

/// Tokens offered as quick-prompt buttons, in display order.
pub const QUICK_PROMPTS: &[&str] = &[
    "Tell me a joke",
    "Give me a fun fact",
    "Write a short poem",
    "Explain it simply",
    TRANSLATE,
];

/// Currently active quick prompts, in the order they were selected.
///
/// `Translate` is never held together with any other token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    tokens: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `token`. Selecting `Translate` clears everything else; selecting
    /// any other token drops `Translate` first. A re-selected token goes to
    /// the end.
    pub fn toggle(&mut self, token: &str) {
        if let Some(pos) = self.tokens.iter().position(|t| t == token) {
            self.tokens.remove(pos);
            return;
        }
        if token == TRANSLATE {
            self.tokens.clear();
        } else {
            self.tokens.retain(|t| t != TRANSLATE);
        }
        self.tokens.push(token.to_string());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_translate(&self) -> bool {
        self.contains(TRANSLATE)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Generate,
    Translate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectivePrompt {
    Ready { mode: Mode, operand: String },
    NoInput,
}

/// Selected tokens win over free text, except in translate mode where the
/// free text is what gets translated.
pub fn compute_effective_prompt(selection: &SelectionState, free_text: &str) -> EffectivePrompt {
    let free_text = free_text.trim();

    let (mode, operand) = if selection.is_translate() {
        (Mode::Translate, free_text.to_string())
    } else if !selection.is_empty() {
        (Mode::Generate, selection.tokens().join("\n\n"))
    } else {
        (Mode::Generate, free_text.to_string())
    };

    if operand.trim().is_empty() {
        EffectivePrompt::NoInput
    } else {
        EffectivePrompt::Ready { mode, operand }
    }
}
