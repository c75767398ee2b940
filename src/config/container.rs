use super::utils::{max_features, serialized_type, stemmer_language};
use crate::{
    error::{PreprocessorError, Result as PreprocessorResult},
    traits::TextSerialize,
    utils::fmt_err,
    DEFAULT_CONFIG_NAME,
};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env::current_dir,
    fs::read_to_string,
    path::{Path, PathBuf},
};

/// macro helper to abstract away repetitive if not default: update checks
macro_rules! update_if_not_default {
    ($old:expr, $new:expr, $default:expr) => {
        if $new != $default {
            *$old = $new;
        }
    };
}

/// Represents the configuration of a `Preprocessor`.
///
/// This struct is the combination of the following:
/// - default configuration values
/// - plus overrides read from configuration files
///
/// In that order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(rename = "type", default = "serialized_type")]
    /// Name of this type of struct, used for serialization, i.e. `{"type":"configuration"}`
    pub kind: String,

    /// Path to the config file used
    #[serde(default)]
    pub config: String,

    /// Previously saved vectorizer state, loaded at construction when the file exists
    #[serde(default)]
    pub vectorizer_path: String,

    /// Maximum vocabulary size when fitting (default: 1420)
    #[serde(default = "max_features")]
    pub max_features: usize,

    /// Newline separated stop word file; the built-in english list is used when empty
    #[serde(default)]
    pub stopwords_path: String,

    /// Language of the snowball stemmer (default: english)
    #[serde(default = "stemmer_language")]
    pub stemmer_language: String,

    /// Level of verbosity, equates to log level
    #[serde(default)]
    pub verbosity: u8,

    /// Store log output as NDJSON
    #[serde(default)]
    pub json: bool,

    /// File in which to store debug output, used in conjunction with verbosity to dictate which
    /// logs are written
    #[serde(default)]
    pub debug_log: String,
}

impl Default for Configuration {
    /// Builds the default Configuration for a Preprocessor
    fn default() -> Self {
        Configuration {
            kind: serialized_type(),
            config: String::new(),
            vectorizer_path: String::new(),
            max_features: max_features(),
            stopwords_path: String::new(),
            stemmer_language: stemmer_language(),
            verbosity: 0,
            json: false,
            debug_log: String::new(),
        }
    }
}

impl Configuration {
    /// Creates a [Configuration](struct.Configuration.html) object with the following
    /// built-in default values
    ///
    /// - **vectorizer_path**: `None`
    /// - **max_features**: `1420`
    /// - **stopwords_path**: `None` (built-in english list)
    /// - **stemmer_language**: `english`
    /// - **verbosity**: `0` (no logging enabled)
    /// - **json**: `false`
    /// - **debug_log**: `None`
    ///
    /// After which, any values defined in a
    /// [lib-ml-config.toml](constant.DEFAULT_CONFIG_NAME.html) config file will override the
    /// built-in defaults.
    ///
    /// `lib-ml-config.toml` can be placed in any of the following locations (in the order shown):
    /// - `CONFIG_DIR/lib-ml/`
    /// - The user's current working directory
    ///
    /// If more than one valid configuration file is found, each one overwrites the values found
    /// previously.
    pub fn new() -> Result<Self> {
        // when compiling for test, we want to eliminate the runtime dependency on the filesystem
        if cfg!(test) {
            return Ok(Configuration::default());
        }

        let mut config = Configuration::default();

        Self::parse_config_files(&mut config)?;

        config.validate()?;

        Ok(config)
    }

    /// read a single config file over the built-in defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::parse_config(path.to_path_buf())
            .with_context(|| fmt_err(&format!("Could not parse {}", path.display())))?;

        config.config = path.to_string_lossy().to_string();
        config.validate()?;

        Ok(config)
    }

    /// reject values that can never produce a working preprocessor
    pub fn validate(&self) -> PreprocessorResult<()> {
        if self.max_features == 0 {
            return Err(PreprocessorError::InvalidConfiguration(String::from(
                "max_features must be a positive integer",
            )));
        }

        Ok(())
    }

    /// Parse all possible versions of the lib-ml-config.toml file, adhering to the order of
    /// precedence outlined above
    fn parse_config_files(config: &mut Self) -> Result<()> {
        // merge a config found at ~/.config/lib-ml/lib-ml-config.toml
        // config_dir() resolves to one of the following
        //   - linux: $XDG_CONFIG_HOME or $HOME/.config
        //   - macOS: $HOME/Library/Application Support
        //   - windows: {FOLDERID_RoamingAppData}
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Couldn't load config"))?;
        let config_file = config_dir.join("lib-ml").join(DEFAULT_CONFIG_NAME);
        Self::parse_and_merge_config(config_file, config)?;

        // merge a config found in the user's current working directory
        let cwd = current_dir()?;
        let config_file = cwd.join(DEFAULT_CONFIG_NAME);
        Self::parse_and_merge_config(config_file, config)?;

        Ok(())
    }

    /// helper function to parse and merge a configuration file, if it exists
    fn parse_and_merge_config(config_file: PathBuf, config: &mut Self) -> Result<()> {
        if config_file.exists() {
            // save off a string version of the path before it goes out of scope
            let conf_str = config_file.to_str().unwrap_or("").to_string();
            let settings = Self::parse_config(config_file)?;

            config.config = conf_str;

            Self::merge_config(config, settings);
        }
        Ok(())
    }

    /// Given two Configurations, overwrite `conf` with the non-default fields found in `new`
    pub(super) fn merge_config(conf: &mut Self, new: Self) {
        // does not include the following Configuration fields, as they don't make sense here
        //  - kind
        //  - config
        update_if_not_default!(&mut conf.vectorizer_path, new.vectorizer_path, "");
        update_if_not_default!(&mut conf.max_features, new.max_features, max_features());
        update_if_not_default!(&mut conf.stopwords_path, new.stopwords_path, "");
        update_if_not_default!(
            &mut conf.stemmer_language,
            new.stemmer_language,
            stemmer_language()
        );
        update_if_not_default!(&mut conf.verbosity, new.verbosity, 0);
        update_if_not_default!(&mut conf.json, new.json, false);
        update_if_not_default!(&mut conf.debug_log, new.debug_log, "");
    }

    /// If present, read in `DEFAULT_CONFIG_NAME` and deserialize the specified values
    ///
    /// uses serde to deserialize the toml into a `Configuration` struct
    pub(super) fn parse_config(config_file: PathBuf) -> Result<Self> {
        let content = read_to_string(config_file)?;
        let config: Self = toml::from_str(content.as_str())?;

        Ok(config)
    }

    /// the configured vectorizer path, if one was given
    pub(crate) fn vectorizer_path(&self) -> Option<&Path> {
        if self.vectorizer_path.is_empty() {
            None
        } else {
            Some(Path::new(&self.vectorizer_path))
        }
    }
}

impl TextSerialize for Configuration {
    /// Simple debug representation of the Configuration
    fn as_str(&self) -> String {
        format!("{:#?}\n", *self)
    }

    /// Create an NDJSON representation of the current Configuration
    ///
    /// (expanded for clarity)
    /// ex:
    /// {
    ///    "type":"configuration",
    ///    "config":"/home/user/.config/lib-ml/lib-ml-config.toml",
    ///    "vectorizer_path":"/models/vectorizer.json",
    ///    "max_features":1420,
    ///    "stopwords_path":"",
    ///    "stemmer_language":"english",
    ///    "verbosity":0,
    ///    "json":false,
    ///    "debug_log":""
    /// }\n
    fn as_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(&self)
            .with_context(|| fmt_err("Could not convert Configuration to JSON"))?;
        json.push('\n');
        Ok(json)
    }
}
