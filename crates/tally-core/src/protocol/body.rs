//! Counter response body.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// `{name: value}` payload returned by create, read and increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterBody {
    pub name: String,
    pub value: u64,
}

impl CounterBody {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Serialize for CounterBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}
