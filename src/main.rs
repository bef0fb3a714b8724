use anyhow::Context;
use clap::Parser;
use showcase::config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "projects-showcase",
    version,
    about = "Browse the projects showcase by category"
)]
struct Cli {
    /// Path to config file (default: ~/.config/projects-showcase/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the projects API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    showcase::logging::init_tracing();

    let config = load_config(&cli)?;
    tracing::info!(base_url = %config.api.base_url, "starting projects showcase");

    showcase::ui::runtime::run(config)
}

/// File, then `PROJECTS_SHOWCASE_API_URL`, then `--api-url`.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    config.apply_env();
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "projects-showcase",
            "--config",
            "/tmp/showcase.toml",
            "--api-url",
            "http://127.0.0.1:9000",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/showcase.toml")));
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn cli_url_wins_and_is_validated() {
        let cli = Cli::parse_from([
            "projects-showcase",
            "--config",
            "/nonexistent/showcase.toml",
            "--api-url",
            "ftp://example.com",
        ]);
        let err = load_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("must use http or https"));
    }
}
