//! Shared pieces of the resource checks

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::Operation;
use crate::error::{Error, Result};

/// How the outcome of a per-ID request loop is asserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertMode {
    /// Every response in the loop must succeed; an empty loop passes
    #[default]
    Every,
    /// Additionally require a successful final response, as the legacy
    /// suite did with its trailing assertion
    Last,
}

impl AssertMode {
    /// Apply the trailing assertion to the last response of a workflow
    pub(crate) fn finish(self, workflow: &'static str, last: Option<StatusCode>) -> Result<()> {
        match (self, last) {
            (AssertMode::Every, _) => Ok(()),
            (AssertMode::Last, Some(status)) if status.is_success() => Ok(()),
            (AssertMode::Last, _) => Err(Error::MissingResponse { workflow }),
        }
    }
}

impl FromStr for AssertMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "every" => Ok(AssertMode::Every),
            "last" => Ok(AssertMode::Last),
            other => Err(Error::Config(format!("unknown assert mode '{}'", other))),
        }
    }
}

impl fmt::Display for AssertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertMode::Every => f.write_str("every"),
            AssertMode::Last => f.write_str("last"),
        }
    }
}

/// List endpoints answer with rows of positional fields
pub type Row = Vec<Value>;

/// Read an identifier out of a positional field
pub(crate) fn row_id(row: &Row, index: usize, operation: Operation) -> Result<String> {
    match row.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(Error::malformed(
            operation,
            format!("field {} is not an identifier: {}", index, other),
        )),
        None => Err(Error::malformed(
            operation,
            format!("row has {} fields, expected more than {}", row.len(), index),
        )),
    }
}
