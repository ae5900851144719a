//! Console output for the launcher
//!
//! Every function returns the text to print; callers choose stdout or
//! stderr. Styling goes through `colored`, so a global
//! `colored::control::set_override(false)` turns it off everywhere.

use colored::Colorize;
use launcher_application::{SkippedDir, VersionReport};
use launcher_domain::Selection;
use std::path::Path;

/// Formats launcher messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Bilingual summary shown before any mode starts.
    pub fn summary(selection: &Selection) -> String {
        let mut output = String::new();
        let label = selection.agent().label();

        output.push_str(&format!(
            "{}\n",
            "Agent Ready / Agent Prêt".bright_magenta()
        ));
        output.push_str(&format!("- Agent: {label} | Agent choisi : {label}\n"));

        let (state_en, state_fr) = if selection.bypass() {
            ("ENABLED", "ACTIVÉ")
        } else {
            ("DISABLED", "DÉSACTIVÉ")
        };
        let bypass_line = format!("- Bypass: {state_en} | Bypass : {state_fr}");
        if selection.bypass() {
            output.push_str(&format!("{}\n", bypass_line.bright_yellow()));
        } else {
            output.push_str(&format!("{}\n", bypass_line.dimmed()));
        }

        if let Some(model) = selection.model() {
            output.push_str(&format!("- Model: {model} | Modèle : {model}\n"));
        }
        if !selection.add_dirs().is_empty() {
            let joined = selection.add_dir_strings().join(", ");
            output.push_str(&format!(
                "- Extra dirs: {joined} | Répertoires ajoutés : {joined}\n"
            ));
        }
        if selection.review_mode() {
            output.push_str(&format!("- {}\n", "REVIEW MODE ENABLED".bright_cyan()));
        }
        if let Some(duration) = selection.loop_duration() {
            output.push_str(&format!(
                "- {}\n",
                format!("LOOP MODE: {duration}").bright_cyan()
            ));
        }
        if selection.dry_run() {
            output.push_str(&format!("- {}\n", "DRY-RUN MODE".bright_yellow()));
        }

        let remark = "WARNING: Read the official docs before enabling bypass.\n\
                      ATTENTION : relisez la documentation officielle avant d'activer le bypass.";
        if selection.bypass() {
            output.push_str(&format!("{}\n", remark.bright_yellow()));
        } else {
            output.push_str(&format!("{remark}\n"));
        }
        output.push_str(&format!("{}", "Bon travail / Happy coding!".bright_green()));

        output
    }

    /// Warning for an `--add-dir` entry that was dropped.
    pub fn skipped_dir(skipped: &SkippedDir) -> String {
        format!("{}", skipped.to_string().yellow())
    }

    pub fn defaults_saved(path: &Path) -> String {
        format!(
            "Configuration saved to {0}\nConfiguration sauvegardée dans {0}",
            path.display()
        )
    }

    pub fn version_report(report: &VersionReport) -> String {
        format!(
            "{} version:\n{}",
            report.agent.label(),
            report.text.trim_end()
        )
    }

    pub fn already_installed(target: &Path) -> String {
        format!("Agent déjà disponible via {}. Rien à faire.", target.display())
    }

    pub fn installed(target: &Path, via_symlink: bool) -> String {
        let how = if via_symlink {
            "lien symbolique"
        } else {
            "copie"
        };
        format!(
            "{} ({how}).",
            format!("Agent installé dans {}", target.display()).green()
        )
    }

    /// Hint for an install directory missing from `$PATH`.
    pub fn path_hint(dir: &Path) -> String {
        format!(
            "⚠️ Ajoutez ce dossier à votre PATH si besoin :\n   export PATH=\"{}:$PATH\"",
            dir.display()
        )
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

/// Whether stdout can show ANSI colours.
pub fn supports_color() -> bool {
    use std::io::IsTerminal;
    color_capable(
        std::io::stdout().is_terminal(),
        std::env::var("TERM").ok().as_deref(),
        std::env::var_os("COLORTERM").is_some(),
    )
}

fn color_capable(is_tty: bool, term: Option<&str>, colorterm: bool) -> bool {
    if !is_tty {
        return false;
    }
    let term = term.unwrap_or("");
    if term == "dumb" {
        return false;
    }
    if term.contains("color") || matches!(term, "xterm" | "xterm-256color" | "screen" | "linux")
    {
        return true;
    }
    colorterm
}
