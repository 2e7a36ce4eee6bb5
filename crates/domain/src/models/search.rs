//! Search criteria and table identifiers for directory queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search criteria over the directory.
///
/// Each field holds a case-insensitive regex pattern; a field left `None`
/// does not constrain the result. The searchable fields are a fixed set,
/// callers cannot name arbitrary columns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub number: Option<String>,
}

impl SearchCriteria {
    pub fn with_first_name(mut self, pattern: impl Into<String>) -> Self {
        self.first_name = Some(pattern.into());
        self
    }

    pub fn with_last_name(mut self, pattern: impl Into<String>) -> Self {
        self.last_name = Some(pattern.into());
        self
    }

    pub fn with_email(mut self, pattern: impl Into<String>) -> Self {
        self.email = Some(pattern.into());
        self
    }

    pub fn with_number(mut self, pattern: impl Into<String>) -> Self {
        self.number = Some(pattern.into());
        self
    }

    /// Returns true when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.number.is_none()
    }
}

/// The tables the directory exposes for dumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Client,
    PhoneNumber,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Client => "client",
            Table::PhoneNumber => "phone_number",
        }
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Table::Client),
            "phone_number" => Ok(Table::PhoneNumber),
            _ => Err(format!("Invalid table name: {}", s)),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
