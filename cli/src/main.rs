//! CLI entrypoint for agent
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use launcher_application::{
    CheckVersionUseCase, DefaultsStore, EnsureAgentReadyUseCase, EnvOverrides, LaunchAgentUseCase,
    LaunchError, PromptError, ReadinessError, ResolveError, ResolveInput, VersionCheckError,
    resolve_selection,
};
use launcher_domain::{ExecutionMode, FAILURE_EXIT_CODE, INTERRUPT_EXIT_CODE, PersistedDefaults};
use launcher_infrastructure::{
    InstallMethod, JsonlHistoryLog, LauncherPaths, SearchPathLocator, TokioProcessExecutor,
    TomlDefaultsStore, install, install_directory, is_root,
};
use launcher_presentation::{
    Cli, ConsoleFormatter, ConsoleModeReporter, TerminalPrompt, supports_color,
};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_mixed();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting agent {}", env!("CARGO_PKG_VERSION"));

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&format!("{:#}", e)));
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let paths = LauncherPaths::detect();
    let env = EnvOverrides::from_env();

    if cli.install {
        return run_install(&env, &paths);
    }

    let use_style = !cli.quiet && supports_color();
    colored::control::set_override(use_style);

    // === Dependency Injection ===
    let store = TomlDefaultsStore::new(paths.config_file());
    let prompt = Arc::new(TerminalPrompt::new());
    let executor = Arc::new(TokioProcessExecutor::new());
    let locator = Arc::new(SearchPathLocator::from_environment(&paths));

    let input = ResolveInput {
        args: cli.to_explicit_args(),
        env,
        defaults: store.load(),
        home_dir: paths.home().map(|home| home.to_path_buf()),
    };

    if cli.check_version {
        let report = CheckVersionUseCase::new(locator.clone(), executor.clone(), prompt.clone())
            .execute(&input)
            .await?;
        println!("{}", ConsoleFormatter::version_report(&report));
        return Ok(0);
    }

    let resolution = resolve_selection(&input, prompt.as_ref()).await?;
    for skipped in &resolution.skipped_dirs {
        eprintln!("{}", ConsoleFormatter::skipped_dir(skipped));
    }
    let selection = resolution.selection;
    debug!(?selection, "Selection resolved");

    if cli.save_defaults {
        match store.save(&PersistedDefaults::from_selection(&selection)) {
            Ok(written) => println!("{}", ConsoleFormatter::defaults_saved(&written)),
            Err(e) => eprintln!("{}", ConsoleFormatter::warning(&e.to_string())),
        }
        if selection.dry_run() {
            return Ok(0);
        }
    }

    let readiness = EnsureAgentReadyUseCase::new(locator.clone(), executor.clone(), prompt.clone());
    readiness.execute(selection.agent()).await?;
    if ExecutionMode::for_selection(&selection).involves_review(&selection) {
        readiness.execute(selection.agent().other()).await?;
    }

    println!("{}", ConsoleFormatter::summary(&selection));

    // The history file is created by the first Normal-mode hand-off.
    let launcher = LaunchAgentUseCase::new(executor, locator, prompt)
        .with_notifier(Arc::new(ConsoleModeReporter::new()))
        .with_history(Arc::new(JsonlHistoryLog::new(paths.history_file())));

    let code = launcher.execute(&selection, &cli.agent_args()).await?;
    Ok(code)
}

fn run_install(env: &EnvOverrides, paths: &LauncherPaths) -> Result<i32> {
    let source = std::env::current_exe().context("locating the running launcher")?;
    let target_dir = install_directory(env, paths.home(), is_root())?;
    let path_var = std::env::var_os("PATH");

    let outcome = install(&source, &target_dir, path_var.as_deref())?;
    match outcome.method {
        InstallMethod::AlreadyInstalled => {
            println!("{}", ConsoleFormatter::already_installed(&outcome.target));
            return Ok(0);
        }
        method => println!(
            "{}",
            ConsoleFormatter::installed(&outcome.target, method == InstallMethod::Symlink)
        ),
    }
    if !outcome.on_path {
        eprintln!("{}", ConsoleFormatter::path_hint(outcome.target_dir()));
    }
    Ok(0)
}

/// Map a failed run to the launcher's exit code.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<ReadinessError>() {
        return e.exit_code();
    }
    let interrupted = matches!(
        error.downcast_ref::<ResolveError>(),
        Some(ResolveError::Prompt(PromptError::Interrupted))
    ) || matches!(
        error.downcast_ref::<LaunchError>(),
        Some(LaunchError::Prompt(PromptError::Interrupted))
    ) || matches!(
        error.downcast_ref::<VersionCheckError>(),
        Some(VersionCheckError::Prompt(PromptError::Interrupted))
    );
    if interrupted {
        INTERRUPT_EXIT_CODE
    } else {
        FAILURE_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_prompt_maps_to_130() {
        let error = anyhow::Error::new(ResolveError::Prompt(PromptError::Interrupted));
        assert_eq!(exit_code_for(&error), 130);
    }

    #[test]
    fn test_timeout_maps_to_failure() {
        let error = anyhow::Error::new(ResolveError::Prompt(PromptError::TimedOut(
            std::time::Duration::from_secs(300),
        )));
        assert_eq!(exit_code_for(&error), 1);
        let error = anyhow::Error::new(ResolveError::NoAgentSpecified);
        assert_eq!(exit_code_for(&error), 1);
    }

    #[test]
    fn test_readiness_error_keeps_installer_code() {
        let error = anyhow::Error::new(ReadinessError::InstallFailed {
            agent: launcher_domain::AgentKind::Codex,
            exit_code: 243,
        });
        assert_eq!(exit_code_for(&error), 243);
    }
}
