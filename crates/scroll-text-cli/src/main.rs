use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scroll_text_core::{AppConfig, ScrollDirection, ScrollMode, ScrollOptions};

mod commands;

#[derive(Parser)]
#[command(name = "scroll-text")]
#[command(author, version, about = "Scrolling titles for hardware button keys")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/scroll-text/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as a plugin: host events on stdin, commands on stdout
    Plugin,
    /// Preview the scrolling key in the terminal
    Watch {
        #[command(flatten)]
        scroll: ScrollArgs,
    },
    /// Print the frame at each position without running timers
    Preview {
        #[command(flatten)]
        scroll: ScrollArgs,
        /// First position to render
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Number of positions (defaults to one full cycle)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Overrides for the configured scroll defaults
#[derive(Args, Debug, Default)]
struct ScrollArgs {
    /// Text to scroll
    text: Option<String>,
    /// Characters visible at once
    #[arg(short = 'w', long = "window")]
    window_size: Option<usize>,
    /// Milliseconds between advances
    #[arg(short = 'i', long = "interval")]
    interval_ms: Option<u64>,
    /// loop or bounce
    #[arg(short = 'm', long)]
    mode: Option<ScrollMode>,
    /// left or right (loop mode)
    #[arg(short = 'd', long)]
    direction: Option<ScrollDirection>,
    /// Dwell after each full cycle in milliseconds
    #[arg(short = 'p', long = "pause")]
    pause_after_scroll_ms: Option<u64>,
}

impl ScrollArgs {
    fn apply(self, base: &ScrollOptions) -> ScrollOptions {
        ScrollOptions {
            text: self.text.unwrap_or_else(|| base.text.clone()),
            window_size: self.window_size.unwrap_or(base.window_size),
            interval_ms: self.interval_ms.unwrap_or(base.interval_ms),
            mode: self.mode.unwrap_or(base.mode),
            direction: self.direction.unwrap_or(base.direction),
            pause_after_scroll_ms: self
                .pause_after_scroll_ms
                .unwrap_or(base.pause_after_scroll_ms),
        }
    }
}

/// Initialize logging on stderr; stdout carries frames or host commands
fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // The terminal preview owns the screen, so it only logs when asked to
    match cli.command {
        Some(Commands::Watch { .. }) => {
            if std::env::var("RUST_LOG").is_ok() {
                init_logging("off");
            }
        }
        _ => init_logging(&config.general.log_level),
    }

    match cli.command {
        Some(Commands::Plugin) | None => commands::plugin::run(&config).await,
        Some(Commands::Watch { scroll }) => {
            commands::watch::run(scroll.apply(&config.scroll)).await
        }
        Some(Commands::Preview { scroll, from, count }) => {
            commands::preview::run(&scroll.apply(&config.scroll), from, count)
        }
        Some(Commands::Config { init }) => commands::config::run(&config, &config_path, init),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_args_override_config() {
        let cli = Cli::try_parse_from([
            "scroll-text", "preview", "Hello world", "-w", "4", "--mode", "bounce",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Preview { scroll, from, count }) => {
                let options = scroll.apply(&ScrollOptions::default());
                assert_eq!(options.text, "Hello world");
                assert_eq!(options.window_size, 4);
                assert_eq!(options.mode, ScrollMode::Bounce);
                assert_eq!(options.interval_ms, 300);
                assert_eq!(from, 0);
                assert!(count.is_none());
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(Cli::try_parse_from(["scroll-text", "watch", "-m", "spin"]).is_err());
    }

    #[test]
    fn test_default_command_is_plugin() {
        let cli = Cli::try_parse_from(["scroll-text"]).unwrap();
        assert!(cli.command.is_none());
    }
}
