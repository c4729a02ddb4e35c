//! Generation errors — every failure identifies the class, method or
//! parameter at fault, and the first one aborts the run.

use thiserror::Error;

/// Raised by the method comment parser itself; the orchestrator wraps it
/// with class/method context.
#[derive(Debug, Error)]
pub enum MethodParseError {
    /// A `@param` line that does not match `<type> $<name> [<description>]`.
    #[error("malformed @param tag in:\n------------------\n{snippet}\n------------------")]
    MalformedParamTag { snippet: String },
}

/// Any condition that aborts a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("missing class documentation for \"{class}\"")]
    MissingClassDoc { class: String },

    #[error("missing documentation for \"{class}::{method}\"")]
    MissingMethodDoc { class: String, method: String },

    #[error("empty description in documentation of \"{class}::{method}\"")]
    EmptyMethodDescription { class: String, method: String },

    #[error("parameter \"{param}\" of \"{class}::{method}\" is not documented")]
    UndocumentedParam {
        class: String,
        method: String,
        param: String,
    },

    #[error("documented parameter \"{param}\" of \"{class}::{method}\" is not declared")]
    UnknownParam {
        class: String,
        method: String,
        param: String,
    },

    #[error("failed to parse documentation of \"{class}::{method}\"")]
    MethodDocParse {
        class: String,
        method: String,
        #[source]
        source: MethodParseError,
    },

    #[error("unknown class \"{class}\"")]
    UnknownClass { class: String },
}
