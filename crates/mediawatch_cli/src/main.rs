//! `mediawatch` command-line entry point.
//!
//! # Responsibility
//! - Parse subcommands, flags and environment overrides.
//! - Wire stdin/stdout into the core sessions.
//!
//! # Invariants
//! - stdout carries session status lines only; errors go to stderr.
//! - Exit status is 0 when input ends and 1 on setup or I/O failure.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use mediawatch_core::notify::config::{DEFAULT_BASE_URL, DEFAULT_ENTITY_ID};
use mediawatch_core::{
    core_version, default_log_level, init_logging, run_media_toggle, run_mic_report, ConfigError,
    HomeAssistantConfig, HomeAssistantNotifier, RunSummary, ToggleMode,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mediawatch", version, about = "React to media-device events read from stdin")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "MEDIAWATCH_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logs go to stderr when unset.
    #[arg(long, global = true, env = "MEDIAWATCH_LOG_DIR")]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print unique token count and microphone presence per line.
    MicReport,
    /// Print media activity per line and toggle a Home Assistant light.
    MediaToggle(MediaToggleArgs),
}

#[derive(Args)]
struct MediaToggleArgs {
    #[arg(long, env = "MEDIAWATCH_HA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Long-lived access token.
    #[arg(long, env = "MEDIAWATCH_HA_TOKEN", default_value = "", hide_env_values = true)]
    token: String,
    #[arg(long, env = "MEDIAWATCH_HA_ENTITY_ID", default_value = DEFAULT_ENTITY_ID)]
    entity_id: String,
    #[arg(long, env = "MEDIAWATCH_HA_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
    /// Only call Home Assistant when the media state changes.
    #[arg(long)]
    only_on_change: bool,
}

impl MediaToggleArgs {
    fn config(&self) -> HomeAssistantConfig {
        HomeAssistantConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            entity_id: self.entity_id.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn mode(&self) -> ToggleMode {
        if self.only_on_change {
            ToggleMode::OnChange
        } else {
            ToggleMode::EveryLine
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("mediawatch: {err}");
        return ExitCode::FAILURE;
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    match run(cli.command, io::stdin().lock(), io::stdout().lock()) {
        Ok(summary) => {
            info!(
                "event=cli_exit module=cli status=ok lines={} failures={}",
                summary.lines, summary.notify_failures
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("mediawatch: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(
    command: Command,
    input: R,
    output: W,
) -> Result<RunSummary, Box<dyn std::error::Error>> {
    match command {
        Command::MicReport => Ok(run_mic_report(input, output)?),
        Command::MediaToggle(args) => {
            let config = load_config(&args)?;
            let notifier = HomeAssistantNotifier::new(config);
            Ok(run_media_toggle(input, output, &notifier, args.mode())?)
        }
    }
}

fn load_config(args: &MediaToggleArgs) -> Result<HomeAssistantConfig, ConfigError> {
    let config = args.config().normalized()?;
    info!(
        "event=config_loaded module=cli status=ok base_url={} entity_id={} timeout_secs={}",
        config.base_url,
        config.entity_id,
        config.timeout.as_secs()
    );
    Ok(config)
}
