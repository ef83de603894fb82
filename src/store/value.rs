use std::fmt;

/// A variable value. The store is stringly typed, so anything written to it
/// is rendered to text first.
#[derive(Debug, Clone, PartialEq)]
pub struct Value(String);

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value(i.to_string())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value(f.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value(b.to_string())
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
