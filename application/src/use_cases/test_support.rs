//! In-memory fakes of every port, shared by the use case tests.

use crate::ports::binary_locator::BinaryLocator;
use crate::ports::clock::Clock;
use crate::ports::history::{HistoryEntry, HistoryLogger};
use crate::ports::mode_progress::{LoopEndReason, ModeNotifier, Stage};
use crate::ports::process::{CapturedOutput, ProcessError, ProcessExecutor};
use crate::ports::prompt::{PromptError, PromptPort};
use async_trait::async_trait;
use launcher_domain::{AgentKind, CommandLine, ExecutionOutcome, LoopDuration};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// ==================== Prompt ====================

/// Prompt that replays scripted answers and records every question.
pub struct ScriptedPrompt {
    interactive: bool,
    answers: Mutex<VecDeque<Result<String, PromptError>>>,
    pub asked: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn interactive(answers: &[&str]) -> Self {
        Self::with_results(answers.iter().map(|a| Ok(a.to_string())).collect())
    }

    pub fn with_results(answers: Vec<Result<String, PromptError>>) -> Self {
        Self {
            interactive: true,
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            ..Self::with_results(Vec::new())
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptPort for ScriptedPrompt {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    async fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(PromptError::Closed))
    }

    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

// ==================== Clock ====================

/// Clock that only moves when told to.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

// ==================== Process executor ====================

/// Executor that replays scripted outcomes and records every command.
///
/// Each blocking run advances the attached clock by `run_time`.
pub struct RecordingExecutor {
    outcomes: Mutex<VecDeque<ExecutionOutcome>>,
    captures: Mutex<VecDeque<Result<CapturedOutput, ProcessError>>>,
    clock: Option<Arc<ManualClock>>,
    run_time: Duration,
    hand_off_code: i32,
    pub runs: Mutex<Vec<(PathBuf, CommandLine)>>,
    pub hand_offs: Mutex<Vec<(PathBuf, CommandLine)>>,
    pub captured: Mutex<Vec<CommandLine>>,
}

impl RecordingExecutor {
    pub fn new(outcomes: Vec<ExecutionOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            captures: Mutex::new(VecDeque::new()),
            clock: None,
            run_time: Duration::ZERO,
            hand_off_code: 0,
            runs: Mutex::new(Vec::new()),
            hand_offs: Mutex::new(Vec::new()),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<ManualClock>, run_time: Duration) -> Self {
        self.clock = Some(clock);
        self.run_time = run_time;
        self
    }

    pub fn with_captures(self, captures: Vec<Result<CapturedOutput, ProcessError>>) -> Self {
        *self.captures.lock().unwrap() = captures.into();
        self
    }

    pub fn with_hand_off_code(mut self, code: i32) -> Self {
        self.hand_off_code = code;
        self
    }

    /// argv of every blocking run, in order.
    pub fn run_argvs(&self) -> Vec<Vec<String>> {
        self.runs
            .lock()
            .unwrap()
            .iter()
            .map(|(_, command)| command.argv())
            .collect()
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    pub fn hand_off_count(&self) -> usize {
        self.hand_offs.lock().unwrap().len()
    }
}

#[async_trait]
impl ProcessExecutor for RecordingExecutor {
    async fn run(&self, program: &Path, command: &CommandLine) -> ExecutionOutcome {
        self.runs
            .lock()
            .unwrap()
            .push((program.to_path_buf(), command.clone()));
        if let Some(clock) = &self.clock {
            clock.advance(self.run_time);
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ExecutionOutcome::completed(0))
    }

    async fn capture(
        &self,
        _program: &Path,
        command: &CommandLine,
        _timeout: Duration,
    ) -> Result<CapturedOutput, ProcessError> {
        self.captured.lock().unwrap().push(command.clone());
        self.captures
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CapturedOutput::default()))
    }

    fn hand_off(&self, program: &Path, command: &CommandLine) -> Result<i32, ProcessError> {
        self.hand_offs
            .lock()
            .unwrap()
            .push((program.to_path_buf(), command.clone()));
        Ok(self.hand_off_code)
    }
}

// ==================== Binary locator ====================

/// Locator over a fixed set of names, all living in `/usr/bin`.
///
/// Names registered with [`FakeLocator::installs_on_refresh`] become visible
/// after the first refresh.
pub struct FakeLocator {
    found: Mutex<HashSet<String>>,
    pending: Mutex<HashSet<String>>,
    pub refreshes: AtomicUsize,
}

impl FakeLocator {
    pub fn with(names: &[&str]) -> Self {
        Self {
            found: Mutex::new(names.iter().map(|n| n.to_string()).collect()),
            pending: Mutex::new(HashSet::new()),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn installs_on_refresh(self, name: &str) -> Self {
        self.pending.lock().unwrap().insert(name.to_string());
        self
    }

    pub fn remove(&self, name: &str) {
        self.found.lock().unwrap().remove(name);
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl BinaryLocator for FakeLocator {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        self.found
            .lock()
            .unwrap()
            .contains(binary)
            .then(|| PathBuf::from("/usr/bin").join(binary))
    }

    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        let pending: Vec<String> = self.pending.lock().unwrap().drain().collect();
        self.found.lock().unwrap().extend(pending);
    }
}

// ==================== Notifier and history ====================

/// Notifier that records events as short strings.
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ModeNotifier for RecordingNotifier {
    fn on_dry_run(&self, command: &CommandLine) {
        self.push(format!("dry_run {command}"));
    }

    fn on_launching(&self, agent: AgentKind) {
        self.push(format!("launching {agent}"));
    }

    fn on_review_primary_start(&self, agent: AgentKind) {
        self.push(format!("review_primary_start {agent}"));
    }

    fn on_review_primary_done(&self, exit_code: i32) {
        self.push(format!("review_primary_done {exit_code}"));
    }

    fn on_review_skipped(&self, cancelled: bool) {
        self.push(format!("review_skipped cancelled={cancelled}"));
    }

    fn on_review_start(&self, reviewer: AgentKind) {
        self.push(format!("review_start {reviewer}"));
    }

    fn on_loop_start(&self, agent: AgentKind, duration: LoopDuration, reviewer: Option<AgentKind>) {
        let reviewer = reviewer.map(|r| r.to_string()).unwrap_or_default();
        self.push(format!("loop_start {agent} {} {reviewer}", duration.minutes()));
    }

    fn on_loop_iteration_start(&self, iteration: u32, remaining_minutes: u64) {
        self.push(format!("iteration_start {iteration} {remaining_minutes}"));
    }

    fn on_loop_iteration_done(&self, iteration: u32, exit_code: i32) {
        self.push(format!("iteration_done {iteration} {exit_code}"));
    }

    fn on_loop_review_start(&self, reviewer: AgentKind) {
        self.push(format!("loop_review_start {reviewer}"));
    }

    fn on_loop_review_skipped(&self) {
        self.push("loop_review_skipped".to_string());
    }

    fn on_loop_end(&self, reason: LoopEndReason, completed: u32) {
        self.push(format!("loop_end {reason:?} {completed}"));
    }

    fn on_stage_interrupted(&self, stage: Stage) {
        self.push(format!("interrupted {stage:?}"));
    }

    fn on_stage_failed(&self, stage: Stage, _detail: &str) {
        self.push(format!("failed {stage:?}"));
    }
}

#[derive(Default)]
pub struct MemoryHistory {
    pub entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryLogger for MemoryHistory {
    fn log(&self, entry: HistoryEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
