use std::collections::HashMap;

use super::value::Value;

/// In-memory variable store: variable name mapped to its text value.
///
/// Lookups return the stored value or `None`; an unset variable is a normal
/// outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    data: HashMap<String, String>,
}

impl DataStore {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }

    pub fn get_var(&self, name: &str) -> Option<String> {
        self.data.get(name).cloned()
    }

    pub fn set_var(&mut self, name: &str, value: impl Into<Value>) {
        let value: Value = value.into();
        self.data.insert(name.to_string(), value.into());
    }

    pub fn del_var(&mut self, name: &str) {
        self.data.remove(name);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<HashMap<String, String>> for DataStore {
    fn from(data: HashMap<String, String>) -> Self {
        Self { data }
    }
}

impl FromIterator<(String, String)> for DataStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}
