//! Canned-output session used by the polling tests.

use std::collections::HashMap;

use super::Session;
use crate::error::{Result, SessionError};

/// Replays fixed outputs keyed by command line. Unknown lines answer empty.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSession {
    outputs: HashMap<String, String>,
    failing: Option<String>,
    pub sent: Vec<String>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    /// Fail with a transport error when `command` is sent.
    pub fn failing_on(mut self, command: &str) -> Self {
        self.failing = Some(command.to_string());
        self
    }
}

impl Session for ScriptedSession {
    async fn execute(&mut self, commands: &[String]) -> Result<Vec<String>> {
        let mut outputs = Vec::with_capacity(commands.len());
        for command in commands {
            self.sent.push(command.clone());
            if self.failing.as_deref() == Some(command.as_str()) {
                return Err(SessionError::Transport {
                    message: "connection reset by peer".to_string(),
                }
                .into());
            }
            outputs.push(self.outputs.get(command).cloned().unwrap_or_default());
        }
        Ok(outputs)
    }
}
