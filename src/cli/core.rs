//! Shell state and the line dispatch pipeline.

use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{paths, LedgerManager, OpenReport},
    errors::LedgerError,
};

pub use crate::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Largest edit distance still offered as a correction for a typo.
const SUGGESTION_DISTANCE: usize = 3;

/// Mutable state threaded through every command handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: LedgerManager,
    pub config: Config,
    pub config_manager: Option<ConfigManager>,
    pub running: bool,
}

impl ShellContext {
    /// Builds the shell state and opens the ledger. Configuration trouble
    /// degrades to defaults with a warning; a damaged data file is reported
    /// and the session starts empty.
    pub fn new(mode: CliMode, data_file: Option<PathBuf>) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let (config, config_manager) = match ConfigManager::new() {
            Ok(manager) => match manager.load() {
                Ok(config) => (config, Some(manager)),
                Err(err) => {
                    cli_io::print_warning(format!(
                        "Could not read configuration, using defaults: {err}"
                    ));
                    (Config::default(), Some(manager))
                }
            },
            Err(err) => {
                cli_io::print_warning(format!("Configuration unavailable: {err}"));
                (Config::default(), None)
            }
        };

        let path = data_file
            .or_else(|| config.data_file.clone())
            .unwrap_or_else(paths::default_data_file);
        let mut manager = LedgerManager::new(path);
        let report = manager.load();

        let context = ShellContext {
            mode,
            registry,
            manager,
            config,
            config_manager,
            running: true,
        };
        context.report_open(&report);
        Ok(context)
    }

    fn report_open(&self, report: &OpenReport) {
        if let Some(error) = &report.error {
            cli_io::print_error(format!(
                "Could not read {}: {}",
                self.manager.path().display(),
                error
            ));
            cli_io::print_warning("Starting with an empty ledger; the file is rewritten on exit.");
        }
        for warning in &report.warnings {
            cli_io::print_warning(warning);
        }
        if report.found {
            cli_io::print_success(format!(
                "Loaded {} records from {}.",
                self.manager.records().len(),
                self.manager.path().display()
            ));
        } else if report.error.is_none() {
            cli_io::print_info("No data file found; starting a fresh ledger.");
        }
    }

    /// Editor prompt, derived from the data file name so a session on a
    /// non-default book shows which one it is writing to.
    pub(crate) fn prompt(&self) -> String {
        let book = self
            .manager
            .path()
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("expenses");
        format!("{book}> ")
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Splits one input line and runs the named command. Lexer trouble and
    /// unknown names stay inside the loop; only handler errors propagate.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&format!("Could not parse input: {err}"));
                return Ok(LoopControl::Continue);
            }
        };
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let name = first.to_lowercase();
        let Some(handler) = self.registry.handler(&name) else {
            self.suggest_command(first);
            return Ok(LoopControl::Continue);
        };

        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        match handler(self, &args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let nearest = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, best)) = nearest {
            if distance <= SUGGESTION_DISTANCE {
                cli_io::print_info(format!("Suggestion: `{best}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action("Exit shell?", false).map_err(CliError::from)
    }

    /// Prints a handler error without breaking the loop. Only an explicit
    /// exit request is treated as silence.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }

    /// Persists the ledger and session bookkeeping. Runs exactly once when
    /// the loop ends; a failed save is reported but never blocks exit.
    pub(crate) fn teardown(&mut self) {
        match self.manager.save() {
            Ok(()) => cli_io::print_success(format!(
                "Saved {} records to {}.",
                self.manager.records().len(),
                self.manager.path().display()
            )),
            Err(err) => cli_io::print_error(format!(
                "Could not save {}: {}",
                self.manager.path().display(),
                err
            )),
        }

        self.config.record_session(self.manager.records().len());
        if let Some(manager) = &self.config_manager {
            if let Err(err) = manager.save(&self.config) {
                cli_io::print_warning(format!("Could not update configuration: {err}"));
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(core) => CliError::Core(core),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Core(LedgerError::Io(err))
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
impl ShellContext {
    /// Script-mode context rooted in a private directory, so tests never
    /// touch the real home.
    pub(crate) fn new_for_tests(base_dir: &std::path::Path) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager =
            ConfigManager::with_base_dir(base_dir.to_path_buf()).expect("test config dir");
        let mut manager = LedgerManager::new(base_dir.join("expenses.dat"));
        manager.load();

        ShellContext {
            mode: CliMode::Script,
            registry,
            manager,
            config: Config::default(),
            config_manager: Some(config_manager),
            running: true,
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base_dir: &std::path::Path,
    lines: &[&str],
) -> Result<ShellContext, CommandError> {
    let mut app = ShellContext::new_for_tests(base_dir);
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}
