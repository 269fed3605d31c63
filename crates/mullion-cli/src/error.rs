//! Errors reported by the command-line tool.
//!
//! [`CliError`] carries enough context for miette's graphical handler: TOML
//! problems point at the offending span of the file they came from.

use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use mullion::MullionError;

/// Everything that can stop a CLI run.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    #[diagnostic(code(mullion::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid drawing file: {message}")]
    #[diagnostic(
        code(mullion::input),
        help("a drawing needs a [parameters] table and optional [[dividers]] entries")
    )]
    Input {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Invalid configuration file: {message}")]
    #[diagnostic(code(mullion::config::parse))]
    ConfigParse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(code(mullion::config::missing))]
    MissingConfig(PathBuf),

    #[error(transparent)]
    #[diagnostic(code(mullion::engine))]
    Engine(#[from] MullionError),

    #[error("Layout has {count} conflict(s)")]
    #[diagnostic(
        code(mullion::conflicts),
        help("run without --strict to export the drawing anyway")
    )]
    Conflicts { count: usize },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a TOML error from the drawing file at `path`.
    pub fn input(path: &str, src: String, err: &toml::de::Error) -> Self {
        Self::Input {
            message: err.message().to_string(),
            span: err.span().map(SourceSpan::from),
            src: NamedSource::new(path, src),
        }
    }

    /// Wraps a TOML error from the configuration file at `path`.
    pub fn config_parse(path: &str, src: String, err: &toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.message().to_string(),
            span: err.span().map(SourceSpan::from),
            src: NamedSource::new(path, src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_keeps_span() {
        let src = "[parameters\nwidth = 600\n".to_string();
        let err = toml::from_str::<toml::Table>(&src).expect_err("unclosed table header");
        let cli_err = CliError::input("frame.toml", src, &err);

        assert!(cli_err.to_string().starts_with("Invalid drawing file"));
        assert_eq!(
            cli_err.code().map(|code| code.to_string()).as_deref(),
            Some("mullion::input")
        );
        assert!(cli_err.source_code().is_some());
        assert!(cli_err.labels().is_some());
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err = CliError::from(MullionError::Config("bad color".to_string()));
        assert_eq!(err.to_string(), "Configuration error: bad color");
    }
}
