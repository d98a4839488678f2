use log::LevelFilter;

/// Environment variable holding the `env_logger` filter directives.
pub const LOG_ENV_VAR: &str = "SPAM_CLASSIFIERS_LOG";

const DEFAULT_FILTER: &str = "error,spam_classifiers=info";

/// Install `env_logger` as the `log` backend, filtered by `SPAM_CLASSIFIERS_LOG`.
///
/// Returns `false` if a logger was already installed, which is harmless.
pub fn init_logging() -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, DEFAULT_FILTER))
        .try_init()
        .is_ok()
}
