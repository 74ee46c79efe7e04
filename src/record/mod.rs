//! Records with locked fields.
//!
//! [`Person`] keeps its fields private and read-only. Changes are expressed
//! as a [`PersonUpdate`] and produce a new value.

mod person;

pub use person::{Address, Person, PersonUpdate};
