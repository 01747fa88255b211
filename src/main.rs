// Entrypoint for the CLI.
// - Loads an optional `.env`, sets up logging on stderr and hands the
//   question to the UI flow.
// - Returns `anyhow::Result` so any failure exits non-zero with its context.

use aishe::{api::ApiClient, config::Config, ui};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Non-UTF-8 bytes become U+FFFD rather than aborting.
    let args = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());
    let Some(question) = ui::question_from_args(args) else {
        ui::print_usage(&mut out)?;
        out.flush()?;
        std::process::exit(1);
    };

    let api = ApiClient::new(Config::from_env())?;
    ui::ask_and_print(&api, &question, &mut out)?;
    Ok(())
}
