use std::path::{Path, PathBuf};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "PROJECTS_SHOWCASE_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `PROJECTS_SHOWCASE_LOG` names a file path;
/// stdout belongs to the TUI. Filtering follows `RUST_LOG`, default `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let unique_path = unique_log_path(Path::new(&log_path), std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{path}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(path: &Path, pid: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}", pid));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_pid() {
        let path = unique_log_path(Path::new("/tmp/showcase.log"), 4242);
        assert_eq!(path, PathBuf::from("/tmp/showcase.log.4242"));
    }
}
