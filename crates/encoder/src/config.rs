//! Configuration for the encoder front ends.
//!
//! Only output formatting is configurable; the field layouts are fixed by the
//! ISA. Configuration is supplied as JSON, or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::isa::instruction::decode;
use crate::isa::mnemonic::Format;

/// Column at which labelled listings start the hex word.
const LABEL_WIDTH: usize = 18;

/// Default configuration constants.
mod defaults {
    /// Print hex digits in uppercase (`0x003100B3`).
    pub const UPPERCASE_HEX: bool = true;

    /// Append the format tag (`[R-type]`) to listed words.
    pub const SHOW_FORMAT: bool = true;

    /// Append the decoded fields to listed words.
    pub const ANNOTATE: bool = false;
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use rvasm_core::config::Config;
///
/// let json = r#"{ "output": { "uppercase_hex": false } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(!config.output.uppercase_hex);
/// assert!(config.output.show_format);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Listing output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, [`ConfigError::Parse`]
    /// when its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// How instruction words are printed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Print hex digits in uppercase.
    #[serde(default = "OutputConfig::default_uppercase_hex")]
    pub uppercase_hex: bool,

    /// Append the instruction format tag, e.g. `[I-type]`.
    #[serde(default = "OutputConfig::default_show_format")]
    pub show_format: bool,

    /// Append the decoded register and immediate fields.
    #[serde(default)]
    pub annotate: bool,
}

impl OutputConfig {
    const fn default_uppercase_hex() -> bool {
        defaults::UPPERCASE_HEX
    }

    const fn default_show_format() -> bool {
        defaults::SHOW_FORMAT
    }

    /// Formats a word as `0x` followed by eight hex digits.
    pub fn hex(&self, word: u32) -> String {
        if self.uppercase_hex {
            format!("0x{word:08X}")
        } else {
            format!("0x{word:08x}")
        }
    }

    /// Formats a word for a listing: hex, then the format tag and decoded
    /// fields when enabled.
    ///
    /// ```
    /// use rvasm_core::config::OutputConfig;
    ///
    /// let out = OutputConfig::default();
    /// assert_eq!(out.listing(0x003100B3), "0x003100B3 [R-type]");
    /// ```
    pub fn listing(&self, word: u32) -> String {
        let decoded = decode(word);
        let mut line = self.hex(word);
        if let Some(format) = Format::of_opcode(decoded.opcode).filter(|_| self.show_format) {
            line.push_str(" [");
            line.push_str(format.tag());
            line.push(']');
        }
        if self.annotate {
            line.push_str(" ; ");
            line.push_str(&decoded.to_string());
        }
        line
    }

    /// Formats a labelled listing line, the label padded to a fixed column.
    ///
    /// ```
    /// use rvasm_core::config::OutputConfig;
    ///
    /// let out = OutputConfig::default();
    /// assert_eq!(
    ///     out.labeled("add x1, x2, x3", 0x003100B3),
    ///     "add x1, x2, x3:   0x003100B3 [R-type]"
    /// );
    /// ```
    pub fn labeled(&self, label: &str, word: u32) -> String {
        let label = format!("{label}:");
        format!("{label:<LABEL_WIDTH$}{}", self.listing(word))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            uppercase_hex: defaults::UPPERCASE_HEX,
            show_format: defaults::SHOW_FORMAT,
            annotate: defaults::ANNOTATE,
        }
    }
}
