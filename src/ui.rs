// UI layer: turns command-line words into a question, runs the single
// ask request and prints the answer block. All output goes through a
// `Write` handle so the flow can be exercised against a buffer.

use crate::api::{ApiClient, QuestionResponse};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::{Duration, Instant};

/// Join the question words with single spaces. Returns `None` when no
/// words were given.
pub fn question_from_args<I, S>(args: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<S> = args.into_iter().collect();
    if words.is_empty() {
        return None;
    }
    let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    Some(words.join(" "))
}

pub fn print_usage(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Usage: aishe <your question>")?;
    writeln!(out, "Example: aishe 'What is the capital of France?'")
}

/// Print answer, processing time and the numbered sources in the order
/// the server returned them.
pub fn print_answer(out: &mut impl Write, resp: &QuestionResponse) -> std::io::Result<()> {
    writeln!(out, "Answer: {}", resp.answer)?;
    writeln!(out)?;
    writeln!(out, "Processing Time: {} seconds", resp.processing_time)?;
    writeln!(out, "Sources:")?;
    for source in &resp.sources {
        writeln!(out, "  {}. {} - {}", source.number, source.title, source.url)?;
    }
    Ok(())
}

pub fn print_total(out: &mut impl Write, elapsed: Duration) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Execution Time: {} seconds", elapsed.as_secs_f64())
}

/// Style the waiting spinner. The ticker thread only runs when there is
/// something to draw.
fn start_spinner(spinner: ProgressBar) -> Result<ProgressBar> {
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Thinking...");
    if !spinner.is_hidden() {
        spinner.enable_steady_tick(Duration::from_millis(100));
    }
    Ok(spinner)
}

/// Ask one question and print the result. Nothing past the waiting notice
/// is printed if the request fails; the error is handed back to `main`.
pub fn ask_and_print(api: &ApiClient, question: &str, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();

    writeln!(out, "Asking: {}", question)?;
    writeln!(out, "Waiting for response...")?;
    writeln!(out)?;
    out.flush()?;

    // Draws on stderr; hidden when stderr is not a terminal.
    let spinner = start_spinner(ProgressBar::new_spinner())?;

    let result = api.ask(question);
    spinner.finish_and_clear();
    let resp = result?;

    print_answer(out, &resp)?;
    let elapsed = start.elapsed();
    tracing::info!(
        server_secs = resp.processing_time,
        total_secs = elapsed.as_secs_f64(),
        "question answered"
    );
    print_total(out, elapsed)?;
    Ok(())
}
