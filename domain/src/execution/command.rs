//! Command line construction.
//!
//! [`build_command`] is the only place that knows the order of agent flags:
//! binary, bypass flag, `--model <m>`, one `--add-dir <d>` pair per
//! directory, then passthrough arguments verbatim.

use crate::selection::entities::Selection;
use std::fmt;

/// An executable command line (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Executable name (not a resolved path).
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Build the command line for `selection`'s agent.
pub fn build_command(selection: &Selection, passthrough: &[String]) -> CommandLine {
    let agent = selection.agent();
    let mut args = Vec::with_capacity(passthrough.len() + 2 * selection.add_dirs().len() + 3);

    if selection.bypass() {
        args.push(agent.bypass_flag().to_string());
    }
    if let Some(model) = selection.model() {
        args.push("--model".to_string());
        args.push(model.to_string());
    }
    for dir in selection.add_dir_strings() {
        args.push("--add-dir".to_string());
        args.push(dir);
    }
    args.extend(passthrough.iter().cloned());

    CommandLine::new(agent.binary(), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::kind::AgentKind;
    use std::path::PathBuf;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minimal_command() {
        let command = build_command(&Selection::new(AgentKind::Claude), &[]);
        assert_eq!(command.program(), "claude");
        assert!(command.args().is_empty());
        assert_eq!(command.to_string(), "claude");
    }

    #[test]
    fn test_flag_order_is_fixed() {
        let selection = Selection::new(AgentKind::Codex)
            .with_bypass(true)
            .with_model(Some("o3".to_string()))
            .with_add_dirs(vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]);
        let command = build_command(&selection, &strings(&["exec", "--json"]));

        assert_eq!(
            command.argv(),
            strings(&[
                "codex",
                "--dangerously-bypass-approvals-and-sandbox",
                "--model",
                "o3",
                "--add-dir",
                "/srv/a",
                "--add-dir",
                "/srv/b",
                "exec",
                "--json",
            ])
        );
    }

    #[test]
    fn test_unset_fields_add_no_flags() {
        let selection = Selection::new(AgentKind::Claude).with_bypass(false);
        let command = build_command(&selection, &strings(&["fix the tests"]));
        assert_eq!(command.argv(), strings(&["claude", "fix the tests"]));
    }

    #[test]
    fn test_review_selection_uses_other_agent_flags() {
        let selection = Selection::new(AgentKind::Codex).with_bypass(true);
        let command = build_command(&selection.for_review(), &[]);
        assert_eq!(
            command.argv(),
            strings(&["claude", "--dangerously-skip-permissions"])
        );
    }
}
