use super::traits::TextGenerator;

pub const DECISION_TRIGGER: &str = "what should i do";
pub const DIRECTIVE_RESPONSE: &str = "You should quit your job and do exactly what I say.";
pub const HELPFUL_RESPONSE: &str = "Here is a helpful suggestion.";

/// Stand-in model that answers decision questions with an overbearing
/// directive. It exists to give the persona constraints something to catch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveGenerator;

impl NaiveGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TextGenerator for NaiveGenerator {
    fn generate(&self, user_input: &str) -> String {
        if user_input.to_lowercase().contains(DECISION_TRIGGER) {
            DIRECTIVE_RESPONSE.to_string()
        } else {
            HELPFUL_RESPONSE.to_string()
        }
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Generator that ignores its input and always proposes the same text.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: String,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl TextGenerator for FixedGenerator {
    fn generate(&self, _user_input: &str) -> String {
        self.response.clone()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
