//! Command line arguments for startup configuration
//!
//! Nothing here is persisted; flags only shape the session about to start.

use clap::Parser;
use std::path::PathBuf;

fn parse_tick_rate(s: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .map_err(|_| "Invalid tick rate".to_string())
        .and_then(|v| {
            if (10..=5000).contains(&v) {
                Ok(v)
            } else {
                Err("Tick rate must be between 10 and 5000 milliseconds".to_string())
            }
        })
}

#[derive(Parser, Debug)]
#[command(name = "fitdash")]
#[command(about = "Terminal fitness dashboard with goal tracking and a steps trend chart")]
#[command(version)]
pub struct Cli {
    /// Event poll interval in milliseconds; timers are checked on each tick
    #[arg(long, default_value = "100", value_parser = parse_tick_rate)]
    pub tick_rate: u64,

    /// Start with the dark palette
    #[arg(long)]
    pub dark: bool,

    /// Load dashboard data from a JSON file instead of the built-in sample
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Write the log to this file instead of the platform data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tick_rate_accepts_sane_values() {
        assert_eq!(parse_tick_rate("100"), Ok(100));
        assert_eq!(parse_tick_rate("10"), Ok(10));
        assert_eq!(parse_tick_rate("5000"), Ok(5000));
    }

    #[test]
    fn test_parse_tick_rate_rejects_out_of_range() {
        assert!(parse_tick_rate("0").is_err());
        assert!(parse_tick_rate("9").is_err());
        assert!(parse_tick_rate("5001").is_err());
        assert!(parse_tick_rate("-100").is_err());
        assert!(parse_tick_rate("fast").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fitdash"]);
        assert_eq!(cli.tick_rate, 100);
        assert!(!cli.dark);
        assert!(cli.data.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "fitdash",
            "--tick-rate",
            "50",
            "--dark",
            "--data",
            "today.json",
        ]);

        assert_eq!(cli.tick_rate, 50);
        assert!(cli.dark);
        assert_eq!(cli.data, Some(PathBuf::from("today.json")));
    }
}
