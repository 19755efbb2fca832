//! The single prompt / dispatch round the binary performs before the
//! chosen person is introduced.

use std::io::{BufRead, Write};

use simple_error::SimpleError;

use crate::common::{config::RunConfig, MyResult};
use crate::person::{PersonFactory, Persons};

/// Drops the line terminator `read_line` keeps; surrounding spaces stay.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

/// Prompts on `output`, reads one line from `input` and lets the factory
/// decide who to build. An unknown type leaves the factory's diagnostic on
/// `output` and yields `None`, so there is nothing to call
/// [crate::person::PersonVariant::person_method] on.
///
/// Errors are reserved for failing to talk to `input`/`output`.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: &mut R, output: &mut W) -> MyResult<Option<Persons>> {
    output.write_all(config.prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)
        .map_err(|err| SimpleError::new(format!("Cannot read person type: {err}")))?;
    if read == 0 {
        log::debug!("Input closed before a line was given");
    }
    let choice = strip_line_ending(&line);

    match PersonFactory::new().build_person_with(choice, &mut *output) {
        Ok(person) => Ok(Some(person)),
        Err(err) => {
            log::warn!("Nobody to introduce: {err}");
            Ok(None)
        }
    }
}
