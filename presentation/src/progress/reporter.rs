//! Console reporting for review and loop modes

use colored::Colorize;
use launcher_application::{LoopEndReason, ModeNotifier, Stage};
use launcher_domain::{AgentKind, CommandLine, LoopDuration};

const BANNER_WIDTH: usize = 60;

/// Prints `[REVIEW MODE]` / `[LOOP MODE]` progress lines.
pub struct ConsoleModeReporter;

impl ConsoleModeReporter {
    pub fn new() -> Self {
        Self
    }

    fn review(message: impl AsRef<str>) -> String {
        format!("[REVIEW MODE] {}", message.as_ref())
            .bright_cyan()
            .to_string()
    }

    fn looping(message: impl AsRef<str>) -> String {
        format!("[LOOP MODE] {}", message.as_ref())
            .bright_cyan()
            .to_string()
    }

    fn banner() -> String {
        "=".repeat(BANNER_WIDTH).bright_cyan().to_string()
    }

    fn stage_interrupted_line(stage: Stage) -> Option<String> {
        match stage {
            Stage::ReviewPrimary => Some(Self::review("Primary agent interrupted by user")),
            Stage::ReviewAgent => Some(Self::review("Review agent interrupted by user")),
            // The loop end line covers it.
            Stage::LoopIteration(_) => None,
            Stage::LoopReview(_) => Some(Self::looping("Review interrupted")),
        }
    }

    fn stage_failed_line(stage: Stage, detail: &str) -> String {
        match stage {
            Stage::ReviewPrimary => Self::review(format!("Primary agent failed: {detail}")),
            Stage::ReviewAgent => Self::review(format!("Review agent failed: {detail}")),
            Stage::LoopIteration(n) => Self::looping(format!("Iteration {n} failed: {detail}")),
            Stage::LoopReview(_) => Self::looping(format!("Review failed: {detail}")),
        }
    }

    fn loop_end_line(reason: LoopEndReason) -> Option<String> {
        match reason {
            LoopEndReason::DeadlineReached => None,
            LoopEndReason::NotEnoughTime => {
                Some(Self::looping("Less than 5 minutes remaining. Ending loop."))
            }
            LoopEndReason::Declined => Some(Self::looping("User requested to stop loop")),
            LoopEndReason::Interrupted => Some(Self::looping("Interrupted by user. Exiting loop.")),
        }
    }
}

impl Default for ConsoleModeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeNotifier for ConsoleModeReporter {
    fn on_dry_run(&self, command: &CommandLine) {
        println!("Dry-run mode: Would execute the following command:");
        println!("{}", command);
    }

    fn on_launching(&self, agent: AgentKind) {
        let label = agent.label();
        println!("{}", format!("Launching {label}...").bright_magenta());
        println!("{}", format!("Lancement de {label}...").bright_magenta());
    }

    fn on_review_primary_start(&self, agent: AgentKind) {
        println!();
        println!("{}", Self::review(format!("Running primary agent: {}", agent.label())));
        println!("{}", Self::review("The agent will execute your request first..."));
        println!();
    }

    fn on_review_primary_done(&self, exit_code: i32) {
        println!();
        println!(
            "{}",
            Self::review(format!("Primary agent completed with exit code {exit_code}"))
        );
    }

    fn on_review_skipped(&self, cancelled: bool) {
        if cancelled {
            println!("{}", Self::review("Review cancelled by user"));
        } else {
            println!("{}", Self::review("Review skipped by user"));
        }
    }

    fn on_review_start(&self, reviewer: AgentKind) {
        println!();
        println!("{}", Self::review(format!("Running review agent: {}", reviewer.label())));
        println!(
            "{}",
            Self::review("The review agent will now check and improve the work...")
        );
        println!();
    }

    fn on_loop_start(&self, agent: AgentKind, duration: LoopDuration, reviewer: Option<AgentKind>) {
        println!();
        println!(
            "{}",
            Self::looping(format!("Starting iterative improvements for {duration}"))
        );
        println!("{}", Self::looping(format!("Agent: {}", agent.label())));
        if let Some(reviewer) = reviewer {
            println!(
                "{}",
                Self::looping(format!("Review mode enabled with {}", reviewer.label()))
            );
        }
        println!();
    }

    fn on_loop_iteration_start(&self, iteration: u32, remaining_minutes: u64) {
        println!();
        println!("{}", Self::banner());
        println!(
            "{}",
            Self::looping(format!(
                "Iteration {iteration} - {remaining_minutes} minutes remaining"
            ))
        );
        println!("{}", Self::banner());
        println!();
    }

    fn on_loop_iteration_done(&self, iteration: u32, exit_code: i32) {
        println!();
        println!(
            "{}",
            Self::looping(format!(
                "Iteration {iteration} completed with exit code {exit_code}"
            ))
        );
    }

    fn on_loop_review_start(&self, reviewer: AgentKind) {
        println!();
        println!(
            "{}",
            Self::looping(format!("Running review agent: {}", reviewer.label()))
        );
        println!();
    }

    fn on_loop_review_skipped(&self) {
        println!("{}", Self::looping("Review skipped"));
    }

    fn on_loop_end(&self, reason: LoopEndReason, completed: u32) {
        if let Some(line) = Self::loop_end_line(reason) {
            println!();
            println!("{}", line);
        }
        println!();
        println!("{}", Self::banner());
        println!("{}", Self::looping(format!("Completed {completed} iterations")));
        println!("{}", Self::banner());
    }

    fn on_stage_interrupted(&self, stage: Stage) {
        if let Some(line) = Self::stage_interrupted_line(stage) {
            println!();
            println!("{}", line);
        }
    }

    fn on_stage_failed(&self, stage: Stage, detail: &str) {
        eprintln!();
        eprintln!("{}", Self::stage_failed_line(stage, detail));
    }
}
