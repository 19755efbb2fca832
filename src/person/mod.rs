pub mod factory;
pub mod interface;
pub mod student;
pub mod teacher;

pub use factory::{PersonFactory, PersonKind, UnrecognizedVariant};
pub use interface::{PersonVariant, Persons};
pub use student::Student;
pub use teacher::Teacher;
