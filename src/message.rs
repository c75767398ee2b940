use anyhow::{Context, Result};
use console::{style, Color};
use serde::{Deserialize, Serialize};

use crate::{traits::TextSerialize, utils::fmt_err};

#[derive(Serialize, Deserialize, Default)]
/// Representation of a log entry, can be represented as a human readable string or JSON
pub struct LogMessage {
    #[serde(rename = "type")]
    /// Name of this type of struct, used for serialization, i.e. `{"type":"log"}`
    pub(crate) kind: String,

    /// The log message
    pub message: String,

    /// The log level
    pub level: String,

    /// The number of seconds elapsed since the logger was initialized
    pub time_offset: f32,

    /// The module from which log::* was called
    pub module: String,
}

/// Implementation of LogMessage
impl TextSerialize for LogMessage {
    /// Create a string representation of the log message
    ///
    /// ex:  INF      0.021 lib_ml::preprocessor fitted vocabulary with 50 features
    fn as_str(&self) -> String {
        let (level_name, level_color) = match self.level.as_str() {
            "ERROR" => ("ERR", Color::Red),
            "WARN" => ("WRN", Color::Red),
            "INFO" => ("INF", Color::Cyan),
            "DEBUG" => ("DBG", Color::Yellow),
            "TRACE" => ("TRC", Color::Magenta),
            _ => ("UNK", Color::White),
        };

        format!(
            "{} {:10.03} {} {}\n",
            style(level_name).bg(level_color).black(),
            style(self.time_offset).dim(),
            self.module,
            style(&self.message).dim(),
        )
    }

    /// Create an NDJSON representation of the log message
    ///
    /// (expanded for clarity)
    /// ex:
    /// {
    ///   "type": "log",
    ///   "message": "loaded vectorizer from /models/vectorizer.json",
    ///   "level": "DEBUG",
    ///   "time_offset": 0.86333454,
    ///   "module": "lib_ml::preprocessor"
    /// }\n
    fn as_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(&self).with_context(|| {
            fmt_err(&format!(
                "Could not convert {}:{} to JSON",
                self.level, self.message
            ))
        })?;
        json.push('\n');
        Ok(json)
    }
}
