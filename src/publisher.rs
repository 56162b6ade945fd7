// Makes the composed status line visible (dwm reads the X root window name).

use crate::command::CommandRunner;
use crate::error::SourceError;
use std::future::Future;

pub trait Publisher {
    fn publish(&self, line: &str) -> impl Future<Output = Result<(), SourceError>>;
}

/// Publishes by running a command with the line as its last argument
/// (`xsetroot -name <line>` by default).
pub struct CommandPublisher<R> {
    runner: R,
    argv: Vec<String>,
}

impl<R: CommandRunner> CommandPublisher<R> {
    pub fn new(runner: R, argv: Vec<String>) -> Self {
        Self { runner, argv }
    }
}

impl<R: CommandRunner> Publisher for CommandPublisher<R> {
    async fn publish(&self, line: &str) -> Result<(), SourceError> {
        let mut argv = self.argv.clone();
        argv.push(line.to_string());
        self.runner.run(&argv).await.map(|_| ())
    }
}
