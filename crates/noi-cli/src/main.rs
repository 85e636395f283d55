use anyhow::Result;
use clap::{Parser, Subcommand};
use noi_acquire::ScrapeConfig;
use noi_model::{TargetList, BASE_URL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "noi")]
#[command(about = "Snapshot the Nectar of Instruction from vedabase.io into data.json and data.js")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Defaults to `scrape` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every page and write data.json and data.js
    Scrape {
        /// Directory the snapshot files are written to
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: PathBuf,

        /// Library root the page URLs are built from (must end with '/')
        #[arg(long, default_value = BASE_URL)]
        base_url: String,
    },

    /// Check that data.json and data.js hold the same records
    Verify {
        /// Directory containing data.json and data.js
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Skip checking record ids against the built-in page list
        #[arg(long)]
        skip_target_check: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Scrape {
            output_dir: PathBuf::from("."),
            base_url: BASE_URL.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the HTTP stack quiet at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper_util=info,rustls=info",
        LogLevel::Trace => "trace,hyper_util=info,rustls=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command.unwrap_or_default() {
        Commands::Scrape {
            output_dir,
            base_url,
        } => {
            anyhow::ensure!(
                base_url.ends_with('/'),
                "--base-url must end with '/', got '{base_url}'"
            );
            let config = ScrapeConfig::new(TargetList::nectar_of_instruction(&base_url));
            tracing::info!(
                base_url = %base_url,
                output_dir = %output_dir.display(),
                "Scraping Nectar of Instruction"
            );
            noi_acquire::run(&config, &output_dir).await?;
        }
        Commands::Verify {
            dir,
            skip_target_check,
        } => {
            tracing::info!(dir = %dir.display(), "Verifying snapshot");
            let targets = TargetList::default();
            let targets = (!skip_target_check).then_some(&targets);
            noi_validate::verify(&dir, targets)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_scrape() {
        let cli = Cli::try_parse_from(["noi"]).unwrap();
        assert!(cli.command.is_none());
        match cli.command.unwrap_or_default() {
            Commands::Scrape {
                output_dir,
                base_url,
            } => {
                assert_eq!(output_dir, PathBuf::from("."));
                assert_eq!(base_url, BASE_URL);
            }
            Commands::Verify { .. } => panic!("expected scrape"),
        }
    }

    #[test]
    fn test_verify_arguments() {
        let cli = Cli::try_parse_from([
            "noi",
            "verify",
            "site",
            "--skip-target-check",
            "--utc",
        ])
        .unwrap();
        assert!(cli.utc);
        match cli.command {
            Some(Commands::Verify {
                dir,
                skip_target_check,
            }) => {
                assert_eq!(dir, PathBuf::from("site"));
                assert!(skip_target_check);
            }
            _ => panic!("expected verify"),
        }
    }
}
