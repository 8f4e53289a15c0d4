/// Source of candidate responses for the transformation loop.
///
/// The loop treats the generator as opaque and infallible: whatever text it
/// returns is the candidate that gets checked, repaired or rejected.
pub trait TextGenerator {
    fn generate(&self, user_input: &str) -> String;

    /// Short label used in logs.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> String,
{
    fn generate(&self, user_input: &str) -> String {
        self(user_input)
    }
}
