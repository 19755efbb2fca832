use std::io::{self, Write};

use enum_dispatch::enum_dispatch;

use super::{student::Student, teacher::Teacher};

/// What every kind of person can do.
#[enum_dispatch]
pub trait PersonVariant {
    /// The display name fixed at construction
    fn name(&self) -> &str;
    /// The line this person introduces itself with, without a line break
    fn description(&self) -> &'static str;

    /// Writes [PersonVariant::description] as a single line to `out`.
    fn write_description(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.description())
    }

    /// Introduces the person on stdout.
    fn person_method(&self);
}

/// Writes `person`'s description to stdout; a failed write is only logged.
pub fn introduce<P: PersonVariant + ?Sized>(person: &P) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(err) = person.write_description(&mut lock).and_then(|_| lock.flush()) {
        log::warn!("Cannot write {:?} to stdout: {err}", person.name());
    }
}

/// The closed set of people the factory can hand out.
#[enum_dispatch(PersonVariant)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persons {
    Student,
    Teacher,
}
