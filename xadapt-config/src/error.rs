use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for xadapt-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the adapter manifest path with '--manifest <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse adapter manifest")]
    #[diagnostic(code(xadapt::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed adapter specification '{token}'")]
    #[diagnostic(
        code(xadapt::malformed_spec),
        help(
            "each specification must be 'adapterType,boundType,valueType', e.g. 'pkg.BoolAdapter,pkg.TTrueFalse,bool'"
        )
    )]
    MalformedSpec {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected three comma-separated type names, found {parts}")]
        span: SourceSpan,
        token: String,
        parts: usize,
    },

    #[error("empty {role} type in adapter specification '{token}'")]
    #[diagnostic(
        code(xadapt::empty_type_name),
        help("every part of the triple must be a fully qualified type name")
    )]
    EmptyTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("the {role} type is empty")]
        span: SourceSpan,
        token: String,
        role: &'static str,
    },

    #[error("{message}")]
    #[diagnostic(code(xadapt::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }
}
