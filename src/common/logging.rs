use env_logger::{Builder, Env};

use super::config::RunConfig;

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` wins over [RunConfig::log_filter]. Calling this twice is
/// harmless: the second attempt is reported and otherwise ignored.
pub fn init_logging(config: &RunConfig) {
    let env = Env::default().default_filter_or(config.log_filter.as_str());
    if let Err(err) = Builder::from_env(env).try_init() {
        log::debug!("Logger already initialised: {err}");
    }
}
