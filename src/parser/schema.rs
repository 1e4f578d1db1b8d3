//! Log entry and aggregate result definitions.
//!
//! Entries are kept as raw JSON objects so every field the profiled
//! process wrote survives the round trip untouched. Only `time` is
//! interpreted.

use crate::utils::config::TIME_FIELD;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// Sort key of a log entry
///
/// Numbers compare with numbers (integers exactly, whatever their size)
/// and strings with strings. A number and a string do not compare.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Number(Number),
    Text(String),
}

/// Which family a timestamp belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKind {
    Number,
    Text,
}

impl std::fmt::Display for TimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeKind::Number => f.write_str("numeric"),
            TimeKind::Text => f.write_str("string"),
        }
    }
}

impl Timestamp {
    /// Any scalar except null; booleans count as 0 and 1
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(b) => Some(Self::Number(Number::from(u8::from(*b)))),
            _ => None,
        }
    }

    pub fn kind(&self) -> TimeKind {
        match self {
            Self::Number(_) => TimeKind::Number,
            Self::Text(_) => TimeKind::Text,
        }
    }

    /// Numeric value, when the timestamp is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(_) => None,
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Some(cmp_numbers(a, b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn cmp_numbers(a: &Number, b: &Number) -> Ordering {
    match (as_integer(a), as_integer(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => cmp_integer_float(x, b.as_f64().unwrap_or(f64::NAN)),
        (None, Some(y)) => cmp_integer_float(y, a.as_f64().unwrap_or(f64::NAN)).reverse(),
        (None, None) => {
            let x = a.as_f64().unwrap_or(f64::NAN);
            let y = b.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
    }
}

/// Exact integer/float comparison; `as` saturates out-of-range floats
fn cmp_integer_float(int: i128, float: f64) -> Ordering {
    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

/// One timestamped record written by the external profiler
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct LogEntry {
    fields: Map<String, Value>,
    time: Timestamp,
}

impl LogEntry {
    /// Wrap a JSON value, returning `None` unless it is an object
    /// with a scalar `time` field
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let time = fields.get(TIME_FIELD).and_then(Timestamp::from_value)?;
        Some(Self { fields, time })
    }

    /// Sort key
    pub fn time(&self) -> &Timestamp {
        &self.time
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Value> for LogEntry {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("entry has no scalar `{TIME_FIELD}` field"))
    }
}

impl Serialize for LogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// All entries across every discovered log file, sorted by `time`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AggregateResult {
    pub entries: Vec<LogEntry>,

    /// Number of log files that contributed
    #[serde(skip)]
    pub file_count: usize,
}

impl AggregateResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distance between the first and last timestamp, for numeric times
    pub fn time_span(&self) -> Option<f64> {
        let first = self.entries.first()?.time().as_f64()?;
        let last = self.entries.last()?.time().as_f64()?;
        Some(last - first)
    }
}
