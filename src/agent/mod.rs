mod groq;
mod translate;

pub use groq::GroqAgentService;
pub use translate::TranslateService;
