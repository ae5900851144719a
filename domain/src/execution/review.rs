//! Instructions handed to the reviewing agent.

/// Passthrough argument for a single review step.
pub const REVIEW_INSTRUCTION: &str = "Review the previous agent's work. Check for bugs, errors, and improvements. Fix any issues found and ensure production-ready quality.";

/// Passthrough argument for the review step of loop iteration `iteration`.
pub fn iteration_review_instruction(iteration: u32) -> String {
    format!("Review iteration {iteration}. Check for bugs and improvements. Fix any issues found.")
}
