use serde::Serialize;
use serde_json::Value;
use std::backtrace::Backtrace;
use std::collections::BTreeMap;
use std::error::Error;

/// Structured data attached to a log entry.
///
/// A closed set of shapes instead of an opaque "anything" value, so the
/// renderers handle every case exhaustively. Error values in particular get
/// an explicit projection: serializing a bare error type naively loses its
/// message and cause chain, so they travel as [`ErrorDetails`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Any plain JSON value: object, array, string, number, bool, null.
    Plain(Value),
    /// A projected error with message, captured stack, and cause chain.
    Error(ErrorDetails),
    /// A map of named fields, each itself a payload. Lets callers attach an
    /// error under a named key next to plain fields.
    Structured(BTreeMap<String, Payload>),
}

/// Serializable projection of an error value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<ErrorDetails>>,
}

impl ErrorDetails {
    /// Project an error into its serializable form, capturing the current
    /// backtrace and walking the `source()` chain.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self {
            message: err.to_string(),
            stack: Backtrace::force_capture().to_string(),
            cause: err.source().map(|s| Box::new(Self::from_error(s))),
        }
    }
}

impl Payload {
    /// Wrap an error value, projecting it via [`ErrorDetails::from_error`].
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Payload::Error(ErrorDetails::from_error(err))
    }

    /// Build a structured payload from named fields.
    pub fn structured<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Payload)>,
        K: Into<String>,
    {
        Payload::Structured(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// An empty structured payload, rendering as `{}`.
    pub fn empty() -> Self {
        Payload::Structured(BTreeMap::new())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Plain(value)
    }
}

impl From<ErrorDetails> for Payload {
    fn from(details: ErrorDetails) -> Self {
        Payload::Error(details)
    }
}

impl From<BTreeMap<String, Payload>> for Payload {
    fn from(fields: BTreeMap<String, Payload>) -> Self {
        Payload::Structured(fields)
    }
}
