use std::io;

use person_factory::{cli, common::{config::RunConfig, logging::init_logging, MyResult}, person::PersonVariant};

fn main() -> MyResult<()> {
    let config = RunConfig::default();
    init_logging(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let person = cli::run(&config, &mut stdin.lock(), &mut stdout.lock())?;
    if let Some(person) = person {
        log::debug!("Built: {person:?}");
        person.person_method();
    }
    Ok(())
}
