//! Filter bind values for dynamic query building.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamic filter value that can represent the SQL types bound by the
/// directory query builder.
///
/// Predicate rendering produces SQL text with `$n` placeholders plus an
/// ordered list of these values; the repository layer binds them to the
/// prepared statement in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// A list of string values (for `= ANY(...)`).
    StringList(Vec<String>),
    /// An integer value (for `LIMIT` / `OFFSET`).
    Integer(i64),
    /// A UTC timestamp.
    Timestamp(DateTime<Utc>),
}
