//! Unitbot CLI
//!
//! Reads one command per line from stdin and writes one reply per line to
//! stdout. With arguments, answers the joined arguments once and exits.
//! A leading `!conv` is accepted and ignored.
//!
//! Logs go to stderr; `RUST_LOG` controls the level (default `info`).

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unitbot::{BotConfig, UnitBot};

const COMMAND_PREFIX: &str = "!conv";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Drop an optional `!conv` prefix
fn command_body(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix(COMMAND_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

fn run(bot: &UnitBot) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let body = command_body(&line);
        if body.is_empty() {
            continue;
        }
        writeln!(out, "{}", bot.process(body))?;
        out.flush()?;
    }

    info!("input closed");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let bot = match UnitBot::new(&config) {
        Ok(bot) => bot,
        Err(e) => {
            error!(error = %e, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let joined = args.join(" ");
        println!("{}", bot.process(command_body(&joined)));
        return ExitCode::SUCCESS;
    }

    info!(version = env!("CARGO_PKG_VERSION"), "unitbot ready, reading commands from stdin");
    match run(&bot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed reading input");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_body() {
        assert_eq!(command_body("!conv 5 m to ft"), "5 m to ft");
        assert_eq!(command_body("  5 m to ft \n"), "5 m to ft");
        assert_eq!(command_body("!conv"), "");
        assert_eq!(command_body("!convert 5 m"), "!convert 5 m");
    }
}
