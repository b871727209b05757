//! Answer types for interactive prompts.

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Accepts `yes` or `no` in any letter case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("yes") {
            Some(Answer::Yes)
        } else if input.eq_ignore_ascii_case("no") {
            Some(Answer::No)
        } else {
            None
        }
    }
}
