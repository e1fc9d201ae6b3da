//! Splitter settings that can be kept in a TOML or YAML file.
//!
//! ```toml
//! split-char = ";"
//! quote-char = "'"
//! escape-char = "\\"
//! ```

use std::iter::FusedIterator;
use std::path::Path;
use std::{fs, io};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::split::{
    split_quoted, split_self_escape, split_with_escape, EscapeSplit, QuotedSplit, SelfEscapeSplit,
    SplitError,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Split(#[from] SplitError),
}

fn default_split_char() -> char {
    ';'
}

/// Keys `split-char` (default `;`), `escape-char` and `quote-char`.
///
/// With a quote char the quoted splitter is used and a missing escape char
/// falls back to the quote char. Otherwise the escape char, if any, protects
/// the delimiter. See [`SplitConfig::mode`].
///
/// ```
/// # use split_rs::config::{from_toml_str, SplitMode};
/// let config = from_toml_str(r#"quote-char = "'""#).unwrap();
/// assert_eq!(config.mode(), SplitMode::Quoted {
///     split_char:  ';',
///     quote_char:  '\'',
///     escape_char: '\'',
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SplitConfig {
    #[serde(default = "default_split_char")]
    pub split_char:  char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape_char: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_char:  Option<char>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split_char:  default_split_char(),
            escape_char: None,
            quote_char:  None,
        }
    }
}

/// The splitter a [`SplitConfig`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    SelfEscape {
        split_char: char,
    },
    Escape {
        split_char:  char,
        escape_char: char,
    },
    Quoted {
        split_char:  char,
        quote_char:  char,
        escape_char: char,
    },
}

impl SplitConfig {
    /// Only a delimiter, which escapes itself by doubling.
    pub fn self_escape(split_char: char) -> SplitConfig {
        SplitConfig {
            split_char,
            ..Default::default()
        }
    }

    pub fn with_escape_char(self, escape_char: char) -> SplitConfig {
        SplitConfig {
            escape_char: Some(escape_char),
            ..self
        }
    }

    pub fn with_quote_char(self, quote_char: char) -> SplitConfig {
        SplitConfig {
            quote_char: Some(quote_char),
            ..self
        }
    }

    /// Without a quote char the escape char protects the delimiter, with one
    /// it protects the quote. A quote without escape char escapes itself.
    pub fn mode(&self) -> SplitMode {
        let split_char = self.split_char;
        match (self.quote_char, self.escape_char) {
            (None, None) => SplitMode::SelfEscape { split_char },
            (None, Some(escape_char)) => SplitMode::Escape {
                split_char,
                escape_char,
            },
            (Some(quote_char), escape_char) => SplitMode::Quoted {
                split_char,
                quote_char,
                escape_char: escape_char.unwrap_or(quote_char),
            },
        }
    }

    /// # Errors
    /// The [`SplitError`] [`split_quoted`] would return for these settings.
    pub fn validate(&self) -> Result<(), SplitError> {
        if let Err(err) = self.split(None::<&str>) {
            debug!("Split Config Rejected: {:?}, {}", self, err);
            return Err(err);
        }
        Ok(())
    }

    /// Splits `text` with the splitter these settings select.
    ///
    /// # Errors
    /// [`SplitError`] for settings [`split_quoted`] rejects.
    pub fn split<'a, T>(&self, text: T) -> Result<Fields<'a>, SplitError>
    where
        T: Into<Option<&'a str>>,
    {
        let fields = match self.mode() {
            SplitMode::SelfEscape { split_char } => {
                Fields::SelfEscape(split_self_escape(text, split_char))
            },
            SplitMode::Escape {
                split_char,
                escape_char,
            } => Fields::Escape(split_with_escape(text, split_char, escape_char)),
            SplitMode::Quoted {
                split_char,
                quote_char,
                escape_char,
            } => Fields::Quoted(split_quoted(text, split_char, quote_char, escape_char)?),
        };
        Ok(fields)
    }
}

/// Fields produced by [`SplitConfig::split`].
#[derive(Debug)]
pub enum Fields<'a> {
    SelfEscape(SelfEscapeSplit<'a>),
    Escape(EscapeSplit<'a>),
    Quoted(QuotedSplit<'a>),
}

impl Iterator for Fields<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Fields::SelfEscape(fields) => fields.next(),
            Fields::Escape(fields) => fields.next(),
            Fields::Quoted(fields) => fields.next(),
        }
    }
}

impl FusedIterator for Fields<'_> {}

/// Reads and validates a [`SplitConfig`] from TOML text.
pub fn from_toml_str(s: &str) -> Result<SplitConfig, ConfigError> {
    let config = toml::from_str::<SplitConfig>(s)?;
    config.validate()?;
    Ok(config)
}

/// Reads and validates a [`SplitConfig`] from YAML text.
pub fn from_yaml_str(s: &str) -> Result<SplitConfig, ConfigError> {
    let config = serde_yaml::from_str::<SplitConfig>(s)?;
    config.validate()?;
    Ok(config)
}

fn read_file<P>(path: P) -> Result<String, ConfigError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(file_content) => {
            debug!(
                "# File Content: {:?}:\n-------content start-------\n{}\n-------content end-------",
                path, file_content
            );
            Ok(file_content)
        },
        Err(err) => {
            debug!("Read File Err: {:?}, {:?}", path, err);
            Err(err.into())
        },
    }
}

/// [`from_toml_str`] on the content of the file at `path`.
pub fn parse_toml_file<P>(path: P) -> Result<SplitConfig, ConfigError>
where
    P: AsRef<Path>,
{
    from_toml_str(&read_file(path)?)
}

/// [`from_yaml_str`] on the content of the file at `path`.
pub fn parse_yaml_file<P>(path: P) -> Result<SplitConfig, ConfigError>
where
    P: AsRef<Path>,
{
    from_yaml_str(&read_file(path)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{
        from_toml_str, from_yaml_str, parse_toml_file, parse_yaml_file, ConfigError, SplitConfig,
        SplitMode,
    };
    use crate::split::SplitError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("split-rs-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            SplitConfig::self_escape(';').mode(),
            SplitMode::SelfEscape { split_char: ';' }
        );
        assert_eq!(
            SplitConfig::self_escape(';').with_escape_char('\\').mode(),
            SplitMode::Escape {
                split_char:  ';',
                escape_char: '\\',
            }
        );
        assert_eq!(
            SplitConfig::self_escape(';').with_quote_char('"').mode(),
            SplitMode::Quoted {
                split_char:  ';',
                quote_char:  '"',
                escape_char: '"',
            }
        );
    }

    #[test]
    fn test_split() {
        let fields: Vec<_> = SplitConfig::default().split("a;b;;c").unwrap().collect();
        assert_eq!(fields, ["a", "b;c"]);

        let config = SplitConfig::self_escape(',').with_escape_char('\\');
        let fields: Vec<_> = config.split(r"a\,b,c").unwrap().collect();
        assert_eq!(fields, ["a,b", "c"]);

        let config = SplitConfig::self_escape(',').with_quote_char('"');
        let fields: Vec<_> = config.split(r#""a,b",""c"#).unwrap().collect();
        assert_eq!(fields, ["a,b", "\"c"]);

        assert_eq!(SplitConfig::default().split(None::<&str>).unwrap().count(), 0);
    }

    #[test]
    fn test_validate() {
        assert!(SplitConfig::default().validate().is_ok());
        // the escape char may be the delimiter when nothing is quoted
        assert!(SplitConfig::self_escape(';').with_escape_char(';').validate().is_ok());
        assert_eq!(
            SplitConfig::self_escape(';').with_quote_char(';').validate(),
            Err(SplitError::QuoteIsDelimiter(';'))
        );
        assert_eq!(
            SplitConfig::self_escape(';')
                .with_quote_char('\'')
                .with_escape_char(';')
                .validate(),
            Err(SplitError::EscapeIsDelimiter(';'))
        );
    }

    #[test]
    fn test_from_toml_str() {
        let config = from_toml_str(
            r#"
            split-char = ","
            quote-char = "'"
            escape-char = "\\"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            SplitConfig::self_escape(',').with_quote_char('\'').with_escape_char('\\')
        );

        let config = from_toml_str("").unwrap();
        assert_eq!(config, SplitConfig::default());

        let err = from_toml_str(r#"quote-char = ";""#).unwrap_err();
        assert!(matches!(err, ConfigError::Split(SplitError::QuoteIsDelimiter(';'))));

        let err = from_toml_str(r#"split-char = "ab""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_yaml_str() {
        let config = from_yaml_str("split-char: '|'\nescape-char: '\\'\n").unwrap();
        assert_eq!(config, SplitConfig::self_escape('|').with_escape_char('\\'));

        let err = from_yaml_str("split-char: '|'\nquote-char: '\"'\nescape-char: '|'\n").unwrap_err();
        assert!(matches!(err, ConfigError::Split(SplitError::EscapeIsDelimiter('|'))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SplitConfig::self_escape(',').with_quote_char('"');
        let text = toml::to_string(&config).unwrap();
        assert!(!text.contains("escape-char"));
        assert_eq!(from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_files() {
        let toml_path = temp_path("config.toml");
        fs::write(&toml_path, "split-char = \"|\"\n").unwrap();
        let config = parse_toml_file(&toml_path).unwrap();
        fs::remove_file(&toml_path).unwrap();
        assert_eq!(config, SplitConfig::self_escape('|'));

        let yaml_path = temp_path("config.yaml");
        fs::write(&yaml_path, "quote-char: \"'\"\n").unwrap();
        let config = parse_yaml_file(&yaml_path).unwrap();
        fs::remove_file(&yaml_path).unwrap();
        assert_eq!(config, SplitConfig::default().with_quote_char('\''));

        let err = parse_toml_file(temp_path("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
