//! The compositor control-tool contract.
//!
//! Some compositors expose their state through a command-line tool that
//! prints JSON (`hyprctl -j activewindow`, `hyprctl -j cursorpos`, ...).  The
//! [`ControlTool`] trait hides the process handling so backends can be tested
//! with scripted replies.
//!
//! # Reply format
//!
//! Every subcommand used by the backends answers with a single JSON object.
//! [`parse_reply`] turns the raw output into a [`ControlReply`] map and
//! rejects anything else; callers then pick the fields they need.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Parsed output of one control-tool query: the fields of a JSON object.
pub type ControlReply = serde_json::Map<String, Value>;

/// Error type for control-tool queries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The tool could not be started (not installed, not executable, ...).
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but reported failure.
    #[error("{program} {subcommand} exited with code {code:?}: {stderr}")]
    Exit {
        program: String,
        subcommand: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The tool did not finish within the configured bound.
    #[error("{program} {subcommand} did not answer within {timeout:?}")]
    Timeout {
        program: String,
        subcommand: String,
        timeout: Duration,
    },

    /// The output is not valid JSON.
    #[error("could not parse {subcommand} output: {source}")]
    Parse {
        subcommand: String,
        #[source]
        source: serde_json::Error,
    },

    /// The output is valid JSON but not an object.
    #[error("{subcommand} output is not a JSON object")]
    NotAnObject { subcommand: String },

    /// A field the caller cannot do without is absent or has the wrong type.
    #[error("{subcommand} output has no numeric field {field:?}")]
    MissingField {
        subcommand: String,
        field: &'static str,
    },

    /// A coordinate does not fit into a pixel position.
    #[error("{subcommand} field {field:?} is out of range: {value}")]
    OutOfRange {
        subcommand: String,
        field: &'static str,
        value: f64,
    },
}

/// A compositor control tool that answers subcommands with structured data.
#[async_trait]
pub trait ControlTool: Send + Sync {
    /// Runs `subcommand` and returns its parsed reply.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the tool cannot be run, fails, times out,
    /// or prints something that is not a JSON object.
    async fn query(&self, subcommand: &str) -> Result<ControlReply, QueryError>;
}

/// Parses raw control-tool output into a [`ControlReply`].
///
/// # Errors
///
/// Returns [`QueryError::Parse`] for invalid JSON and
/// [`QueryError::NotAnObject`] for JSON that is not an object.
pub fn parse_reply(subcommand: &str, output: &[u8]) -> Result<ControlReply, QueryError> {
    let value: Value = serde_json::from_slice(output).map_err(|source| QueryError::Parse {
        subcommand: subcommand.to_string(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(QueryError::NotAnObject {
            subcommand: subcommand.to_string(),
        }),
    }
}

/// Returns the string field `key`, or an empty string if it is absent or not a string.
pub fn text_field(reply: &ControlReply, key: &str) -> String {
    reply
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Returns the numeric field `key` rounded to whole pixels.
///
/// # Errors
///
/// Returns [`QueryError::MissingField`] if the field is absent or not a number,
/// and [`QueryError::OutOfRange`] if it does not fit into an `i32`.
pub fn coordinate_field(
    reply: &ControlReply,
    subcommand: &str,
    key: &'static str,
) -> Result<i32, QueryError> {
    let value = reply
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| QueryError::MissingField {
            subcommand: subcommand.to_string(),
            field: key,
        })?;

    let rounded = value.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(QueryError::OutOfRange {
            subcommand: subcommand.to_string(),
            field: key,
            value,
        });
    }
    // In range and integral, so the cast is exact.
    Ok(rounded as i32)
}
