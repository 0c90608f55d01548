//! Core constants and runtime setup for trail finder.
//!
//! Defaults shared by the server and the CLI, plus the one-time
//! process setup (environment file, terminal logger).

// ============================================================================
// PAGINATION
// ============================================================================
/// Page returned when the client does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size returned when the client does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

// ============================================================================
// SERVER
// ============================================================================
/// Address the HTTP server binds to when BIND_ADDR is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// CSV used to populate an empty table at startup.
pub const DEFAULT_SEED: &str = "./BoulderTrailHeads.csv";
/// Log level used when LOG_LEVEL is unset or invalid.
pub const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// DATABASE
// ============================================================================
/// Environment variables naming the connection string, in precedence order.
pub const DB_VARS: [&str; 2] = ["DB_URL", "DB_CONN_STRING"];

/// Connection string from the `--db` flag, else the first non-empty
/// variable of [`DB_VARS`].
pub fn db_url(flag: Option<String>) -> Option<String> {
    resolve(flag, |var| std::env::var(var).ok())
}

fn resolve(flag: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    flag.into_iter()
        .chain(DB_VARS.iter().filter_map(|var| lookup(var)))
        .find(|url| !url.trim().is_empty())
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Parse a log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
/// Case-insensitive; surrounding whitespace is ignored.
pub fn level(name: &str) -> Option<log::LevelFilter> {
    name.trim().parse::<log::LevelFilter>().ok()
}

/// Load `.env` from the working directory if one exists.
/// Variables already present in the environment win.
#[cfg(feature = "server")]
pub fn env() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("failed to load .env file: {}", e),
    }
}

/// Initialize terminal logging at the level named by LOG_LEVEL.
/// Falls back to INFO (with a warning) when the variable is invalid.
#[cfg(feature = "server")]
pub fn log() {
    let requested = std::env::var("LOG_LEVEL").ok();
    let filter = requested.as_deref().and_then(level).unwrap_or(DEFAULT_LEVEL);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if let Err(e) = simplelog::CombinedLogger::init(vec![term]) {
        eprintln!("logger already initialized: {}", e);
        return;
    }
    if let Some(name) = requested.filter(|name| level(name).is_none()) {
        log::warn!("invalid LOG_LEVEL {:?}, defaulting to {}", name, DEFAULT_LEVEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(level("info"), Some(log::LevelFilter::Info));
        assert_eq!(level("DEBUG"), Some(log::LevelFilter::Debug));
        assert_eq!(level(" warn "), Some(log::LevelFilter::Warn));
        assert_eq!(level("off"), Some(log::LevelFilter::Off));
        assert_eq!(level("trace"), Some(log::LevelFilter::Trace));
    }

    #[test]
    fn db_flag_wins() {
        let env = |_: &str| Some("postgres://env".to_string());
        let flag = Some("postgres://flag".to_string());
        assert_eq!(resolve(flag, env).as_deref(), Some("postgres://flag"));
        assert_eq!(resolve(Some(" ".into()), env).as_deref(), Some("postgres://env"));
    }

    #[test]
    fn db_conn_string_fallback() {
        let env = |var: &str| match var {
            "DB_CONN_STRING" => Some("postgres://legacy".to_string()),
            _ => None,
        };
        assert_eq!(resolve(None, env).as_deref(), Some("postgres://legacy"));
        let both = |var: &str| match var {
            "DB_URL" => Some("postgres://url".to_string()),
            _ => Some("postgres://legacy".to_string()),
        };
        assert_eq!(resolve(None, both).as_deref(), Some("postgres://url"));
        assert_eq!(resolve(None, |_: &str| None), None);
        assert_eq!(resolve(None, |_: &str| Some(String::new())), None);
    }

    #[test]
    fn level_rejects_unknown() {
        assert_eq!(level("verbose"), None);
        assert_eq!(level(""), None);
    }
}
