//! Scripted control tool for tests and dry runs.
//!
//! `StaticControlTool` answers each subcommand with a fixed raw text reply.
//! The reply goes through the same [`parse_reply`] as real `hyprctl` output,
//! so malformed replies exercise the real error paths.
//!
//! A per-tool `latency` makes every query take that long (on the tokio clock),
//! which lets tests observe whether queries run concurrently.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::control_tool::{parse_reply, ControlReply, ControlTool, QueryError};

/// A control tool that answers from a fixed table of raw replies.
#[derive(Debug, Default)]
pub struct StaticControlTool {
    replies: HashMap<String, String>,
    latency: Duration,
    queries: AtomicUsize,
}

impl StaticControlTool {
    /// Creates a tool with no replies; every query fails with an exit error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies seen on an idle Hyprland session: a kitty terminal at (120, 340).
    pub fn hyprland_sample() -> Self {
        Self::new()
            .with_reply(
                "activewindow",
                r#"{"initialTitle": "Terminal", "initialClass": "kitty", "title": "~/src", "class": "kitty"}"#,
            )
            .with_reply("cursorpos", r#"{"x": 120, "y": 340}"#)
    }

    /// Answers `subcommand` with the raw text `reply`.
    pub fn with_reply(mut self, subcommand: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies.insert(subcommand.into(), reply.into());
        self
    }

    /// Makes every query take `latency` before it answers.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of queries answered so far, including failed ones.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ControlTool for StaticControlTool {
    async fn query(&self, subcommand: &str) -> Result<ControlReply, QueryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.replies.get(subcommand) {
            Some(reply) => parse_reply(subcommand, reply.as_bytes()),
            None => Err(QueryError::Exit {
                program: "static".to_string(),
                subcommand: subcommand.to_string(),
                code: Some(1),
                stderr: format!("no scripted reply for {subcommand}"),
            }),
        }
    }
}
