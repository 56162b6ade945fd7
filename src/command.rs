// External helper processes: argv in, stdout out, bounded by a timeout.

use crate::error::SourceError;
use std::future::Future;
use std::time::Duration;
use tokio::process::Command;

/// Runs an external command and captures its standard output.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> impl Future<Output = Result<String, SourceError>>;
}

/// Spawns real child processes. A child still running at the timeout is killed.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, argv: &[String]) -> Result<String, SourceError> {
        let (program, args) = argv.split_first().ok_or(SourceError::EmptyCommand)?;

        let child = Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| SourceError::Timeout {
                command: program.clone(),
                after: self.timeout,
            })?
            .map_err(|source| SourceError::Spawn {
                command: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::ExitStatus {
                command: program.clone(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
