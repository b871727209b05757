//! Interactive filter selection and yes/no questions.
//!
//! Every prompt here loops until the answer is one of a fixed set of choices.
//! Invalid answers are never errors; they simply cause the question to be
//! asked again.

// Export public items from submodules
pub mod filters;
pub mod input;
pub mod types;

// Re-exports for convenience
pub use filters::collect_filters;
pub use input::{prompt_choice, prompt_yes_no};
pub use types::Answer;
