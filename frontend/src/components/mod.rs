pub mod output;
pub mod prompt_form;
pub mod quick_prompts;
