//! Running menu commands as foreground child processes

use std::io::{self, BufRead, Write};
use std::process;

use crate::error::{Result, TimedialError};

/// How a launched program ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitState {
    code: Option<i32>,
}

impl ExitState {
    /// Exited with `code`
    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Terminated without an exit code (killed by a signal)
    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.code
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Diagnostic shown to the user, `None` on success
    pub fn failure_message(&self) -> Option<String> {
        match self.code {
            Some(0) => None,
            Some(code) => Some(format!(
                "Execution resulted in non-zero return value: {}",
                code
            )),
            None => Some("Execution was terminated by a signal".to_string()),
        }
    }
}

impl From<process::ExitStatus> for ExitState {
    fn from(status: process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs commands while the terminal is released by the interface
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    /// Run `argv` to completion with inherited stdio
    fn launch(&mut self, argv: &[String]) -> Result<ExitState>;

    /// Print `message` and block until the user presses enter
    fn acknowledge(&mut self, message: &str) -> io::Result<()>;
}

/// Launches real processes without a shell
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, argv: &[String]) -> Result<ExitState> {
        let Some((program, args)) = argv.split_first() else {
            return Err(TimedialError::InvalidInput("Nothing to execute".into()));
        };
        tracing::info!("Launching {} {:?}", program, args);

        let status = process::Command::new(program)
            .args(args)
            .status()
            .map_err(|source| TimedialError::Launch {
                program: program.clone(),
                source,
            })?;

        let state = ExitState::from(status);
        tracing::info!("{} exited with {:?}", program, state.exit_code());
        Ok(state)
    }

    fn acknowledge(&mut self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", message)?;
        write!(stdout, "\nPress enter to continue...")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}
