//! Logger setup for the runner.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose logs follow the `--verbose` flag.
const GAME_CRATES: [&str; 3] = ["cubefront_core", "cubefront_sim", "cubefront_app"];

/// Default filter: game crates at `info` (or `debug` when verbose), every
/// other crate at `warn`.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let mut filter = LevelFilter::Warn.to_string().to_lowercase();
    for name in GAME_CRATES {
        filter.push_str(&format!(",{name}={}", level.to_string().to_lowercase()));
    }
    filter
}

/// Install the global logger. `RUST_LOG` replaces the default filter.
///
/// Sim time is carried in the messages, so wall-clock stamps are kept short.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis().format_module_path(false);

    // A second init (tests, embedding hosts) keeps the first logger.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_scopes_levels_to_game_crates() {
        assert_eq!(
            default_filter(false),
            "warn,cubefront_core=info,cubefront_sim=info,cubefront_app=info"
        );
        assert!(default_filter(true).contains("cubefront_sim=debug"));
        assert!(default_filter(true).starts_with("warn,"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("logger installed");
    }
}
