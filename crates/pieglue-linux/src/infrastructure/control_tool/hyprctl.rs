//! `hyprctl` process adapter.
//!
//! Each query spawns `hyprctl -j <subcommand>`, waits for it to exit and
//! parses its standard output as one JSON object.  The `-j` flag switches
//! `hyprctl` from its human-readable format to JSON.
//!
//! # Bounded wait
//!
//! A compositor that hangs must not hang the menu.  Every query is wrapped in
//! `tokio::time::timeout`; when it fires, the child is killed (the command is
//! spawned with `kill_on_drop`) and [`QueryError::Timeout`] is returned.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::control_tool::{parse_reply, ControlReply, ControlTool, QueryError};
use crate::infrastructure::storage::config::HyprctlConfig;

/// Runs queries through the `hyprctl` executable.
#[derive(Debug, Clone)]
pub struct HyprctlTool {
    program: String,
    timeout: Duration,
}

impl HyprctlTool {
    /// Creates a tool that runs `program` and waits at most `timeout` per query.
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Creates a tool from the `[hyprctl]` config section.
    pub fn from_config(config: &HyprctlConfig) -> Self {
        Self::new(config.program.clone(), config.timeout())
    }

    /// The executable this tool runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for HyprctlTool {
    fn default() -> Self {
        Self::from_config(&HyprctlConfig::default())
    }
}

#[async_trait]
impl ControlTool for HyprctlTool {
    async fn query(&self, subcommand: &str) -> Result<ControlReply, QueryError> {
        debug!(program = %self.program, subcommand, "querying control tool");

        let child = Command::new(&self.program)
            .arg("-j")
            .arg(subcommand)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| QueryError::Timeout {
                program: self.program.clone(),
                subcommand: subcommand.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|source| QueryError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(QueryError::Exit {
                program: self.program.clone(),
                subcommand: subcommand.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_reply(subcommand, &output.stdout)
    }
}
