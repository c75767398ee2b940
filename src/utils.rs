use crate::traits::TextSerialize;
use anyhow::{Context, Result};
use console::style;
use std::io::Write;

/// Takes in a log level string and returns a colorized version of it
pub fn level_colorizer(level: &str) -> String {
    match level {
        "ERROR" | "ERR" => style(level).red().bold().to_string(),
        "WARN" | "WRN" => style(level).red().to_string(),
        "INFO" | "INF" => style(level).cyan().to_string(),
        "DEBUG" | "DBG" => style(level).yellow().to_string(),
        "TRACE" | "TRC" => style(level).magenta().to_string(),
        _ => level.to_string(), // ¯\_(ツ)_/¯
    }
}

/// Takes in a string and colors it using console::style
///
/// mainly putting this here in case i want to change the color later, making any changes easy
pub fn module_colorizer(modname: &str) -> String {
    style(modname).cyan().to_string()
}

/// simple wrapper to stay DRY
pub fn fmt_err(msg: &str) -> String {
    format!("{}: {}", level_colorizer("ERROR"), msg)
}

/// write the given TextSerialize implementor to the given writer, as text or NDJSON
pub fn write_to<T, W>(value: &T, writer: &mut W, convert_to_json: bool) -> Result<()>
where
    T: TextSerialize,
    W: Write,
{
    let contents = if convert_to_json {
        value.as_json()?
    } else {
        value.as_str()
    };

    let stripped = console::strip_ansi_codes(&contents);

    writer
        .write_all(stripped.as_bytes())
        .with_context(|| fmt_err("Could not write to output"))?;

    writer
        .flush()
        .with_context(|| fmt_err("Could not flush output"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Dummy {
        field: &'static str,
    }

    impl TextSerialize for Dummy {
        fn as_str(&self) -> String {
            format!("{}\n", style(self.field).red())
        }

        fn as_json(&self) -> Result<String> {
            Ok(format!("{}\n", serde_json::to_string(self)?))
        }
    }

    #[test]
    /// unknown levels come back untouched
    fn level_colorizer_passes_unknown_through() {
        assert_eq!(level_colorizer("NOPE"), "NOPE");
        assert!(level_colorizer("ERROR").contains("ERROR"));
    }

    #[test]
    /// fmt_err prefixes the message with the error level
    fn fmt_err_includes_message() {
        let msg = fmt_err("stuff broke");
        assert!(msg.contains("ERROR"));
        assert!(msg.ends_with("stuff broke"));
    }

    #[test]
    /// write_to strips ansi codes in text mode and writes json in json mode
    fn write_to_text_and_json() {
        let dummy = Dummy { field: "value" };

        let mut text = Vec::new();
        write_to(&dummy, &mut text, false).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "value\n");

        let mut json = Vec::new();
        write_to(&dummy, &mut json, true).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), "{\"field\":\"value\"}\n");
    }
}
