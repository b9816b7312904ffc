//! Core types for the record browser.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a record, assigned by the remote source.
///
/// The members feed uses JSON strings (`"1"`); numeric ids are accepted too
/// and kept in their decimal text form so search can match them.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => RecordId(s),
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Signed(n) => RecordId(n.to_string()),
        })
    }
}

/// One editable attribute of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Role,
}

/// The editable part of a record: update payload and edit draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Role => &mut self.role,
        };
        *slot = value.into();
    }
}

/// A single user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier (assigned by the source, never changed).
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Record {
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Copy of the editable fields.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }

    /// Overwrite the editable fields, leaving the id alone.
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.role = fields.role;
    }

    /// Text projection searched by the filter stage, in column order.
    pub fn search_text(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ]
    }
}

/// Browser statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserStats {
    pub record_count: usize,
    pub filtered_count: usize,
    pub selected_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}
