//! Wire types for the remote user directory.
//!
//! DESIGN
//! ======
//! The profile record is owned by the remote service. Only the fields the
//! dashboard renders are typed; everything else is carried in flattened maps
//! so a record written to storage and read back is identical to what the
//! service sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user profile as returned by the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: UserName,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub picture: Picture,
    pub dob: DateOfBirth,
    /// Fields the client does not interpret (`gender`, `login`, `nat`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub country: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Avatar URLs in three sizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// ISO-8601 timestamp, kept as sent.
    pub date: String,
    pub age: u32,
}

/// Envelope returned by the directory endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    pub results: Vec<User>,
    #[serde(default)]
    pub info: Option<Value>,
}

impl User {
    /// `"First Last"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// `"Title First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// `"City, Country"`.
    pub fn city_line(&self) -> String {
        format!("{}, {}", self.location.city, self.location.country)
    }

    /// `"Number Street, City"`.
    pub fn address_line(&self) -> String {
        format!(
            "{} {}, {}",
            self.location.street.number, self.location.street.name, self.location.city
        )
    }

    pub fn age_label(&self) -> String {
        format!("{} years old", self.dob.age)
    }
}
