//! A small demonstration of the factory pattern: a [person::PersonFactory]
//! turns a type name into one of the [person::Persons], each of which can
//! introduce itself.

pub mod cli;
pub mod common;
pub mod person;
