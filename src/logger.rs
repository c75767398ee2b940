use std::env;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Builder;

use crate::{
    config::{verbosity_filter, Configuration},
    message::LogMessage,
    traits::TextSerialize,
    utils::{fmt_err, write_to},
};

/// Create a customized instance of
/// [env_logger::Logger](https://docs.rs/env_logger/latest/env_logger/struct.Logger.html)
/// with timer offset/color and set the log level based on `verbosity`
///
/// a global logger can only be installed once per process; subsequent calls return an error
pub fn initialize(config: Arc<Configuration>) -> Result<()> {
    let mut builder = Builder::from_default_env();

    // use verbosity = N in lib-ml-config.toml to set the log level; respects an already
    // specified RUST_LOG environment variable
    if env::var("RUST_LOG").is_err() {
        if let Some(filter) = verbosity_filter(config.verbosity) {
            builder.parse_filters(filter);
        }
    }

    let start = Instant::now();

    let file = if !config.debug_log.is_empty() {
        let f = OpenOptions::new() // std fs
            .create(true)
            .append(true)
            .open(&config.debug_log)
            .with_context(|| fmt_err(&format!("Could not open {}", &config.debug_log)))?;

        let mut writer = BufWriter::new(f);

        // write out the configuration to the debug file if it exists
        write_to(&*config, &mut writer, config.json)?;

        Some(Arc::new(RwLock::new(writer)))
    } else {
        None
    };

    builder
        .format(move |buf, record| {
            let log_entry = LogMessage {
                message: record.args().to_string(),
                level: record.level().to_string(),
                time_offset: start.elapsed().as_secs_f32(),
                module: record.target().to_string(),
                kind: "log".to_string(),
            };

            if let Some(buffered_file) = file.clone() {
                if let Ok(mut unlocked) = buffered_file.write() {
                    let _ = write_to(&log_entry, &mut *unlocked, config.json);
                }
            }

            std::io::Write::write_all(buf, log_entry.as_str().as_bytes())
        })
        .try_init()
        .with_context(|| fmt_err("Could not initialize logger"))?;

    Ok(())
}
