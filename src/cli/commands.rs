use crate::config::FetchlogConfig;
use clap::Parser;
use std::path::PathBuf;

/// Fetch URLs over HTTP GET and log each outcome
#[derive(Parser, Debug)]
#[command(
    name = "fetchlog",
    about = "Fetch URLs over HTTP GET and log each outcome",
    version,
    author,
    long_about = "fetchlog issues an HTTP GET to each URL and writes one log line per \
                  outcome: the HTTP status on success, the transport error on failure. \
                  Logs go to stdout, to a JSON log file, or to both.\n\n\
                  Examples:\n  \
                  fetchlog\n  \
                  fetchlog http://www.google.com https://example.com\n  \
                  fetchlog --log-file fetchlog.log --log-name main -v\n  \
                  fetchlog --json --log-level warn http://localhost:8080"
)]
pub struct CliArgs {
    #[arg(
        value_name = "URL",
        help = "URLs to fetch (defaults to FETCHLOG_URLS or the built-in demo URLs)"
    )]
    pub urls: Vec<String>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Append JSON log lines to FILE (created if absent)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Logger name recorded on every log event"
    )]
    pub log_name: Option<String>,

    #[arg(long, help = "Use JSON output on the console")]
    pub json: bool,

    #[arg(long, help = "Do not log to stdout")]
    pub no_console: bool,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Overrides environment-derived settings with the flags given on the command line
    pub fn apply(&self, config: &mut FetchlogConfig) {
        if let Some(level) = &self.log_level {
            config.log_level = level.to_lowercase();
        } else if self.verbose {
            config.log_level = "debug".to_string();
        } else if self.quiet {
            config.log_level = "error".to_string();
        }

        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }

        if let Some(name) = &self.log_name {
            config.log_name = Some(name.clone());
        }

        if self.json {
            config.log_json = true;
        }

        if self.no_console {
            config.log_console = false;
        }

        if !self.urls.is_empty() {
            config.urls = self.urls.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn base_config() -> FetchlogConfig {
        FetchlogConfig {
            log_level: "info".to_string(),
            log_json: false,
            log_console: true,
            log_file: None,
            log_name: None,
            urls: vec!["www.google.com".to_string()],
        }
    }

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_args_keep_config() {
        let args = CliArgs::parse_from(["fetchlog"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_console);
        assert!(config.log_file.is_none());
        assert!(config.log_name.is_none());
        assert_eq!(config.urls, vec!["www.google.com"]);
    }

    #[test]
    fn test_urls_override() {
        let args = CliArgs::parse_from(["fetchlog", "http://a", "http://b"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.urls, vec!["http://a", "http://b"]);
    }

    #[test]
    fn test_logging_flags() {
        let args = CliArgs::parse_from([
            "fetchlog",
            "--log-file",
            "/tmp/out.log",
            "--json",
            "--no-console",
            "--log-name",
            "main",
            "-v",
        ]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert!(!config.log_console);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/out.log")));
        assert_eq!(config.log_name.as_deref(), Some("main"));
    }

    #[test]
    fn test_explicit_level_wins_over_quiet() {
        let args = CliArgs::parse_from(["fetchlog", "-q", "--log-level", "WARN"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_quiet_sets_error_level() {
        let args = CliArgs::parse_from(["fetchlog", "--quiet"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from(["fetchlog", "-v", "-q"]);
        assert!(result.is_err());
    }
}
