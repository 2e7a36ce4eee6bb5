//! Domain models for the Client Directory.

pub mod client;
pub mod phone;
pub mod search;

pub use client::{Client, ClientUpdate, NewClient};
pub use phone::{NewPhone, PhoneNumber};
pub use search::{SearchCriteria, Table};
