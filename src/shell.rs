//! Interactive lookup shell.
//!
//! Loads the corpus once, then reads one query per line until the operator
//! types an exit token, closes stdin, or presses Ctrl-C. A failure while
//! handling one query is printed and the shell keeps going.
//!
//! Lines are read on a plain OS thread and handed over a channel. A read
//! parked on that thread never holds up runtime shutdown, so Ctrl-C exits
//! immediately even while stdin is still open.

use anyhow::Result;
use std::future::Future;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;

use dossier_core::{Corpus, SearchEngine};

use crate::config::Config;
use crate::display;
use crate::loader;

/// Lines that end the session, compared lower-cased and trimmed.
pub const EXIT_TOKENS: &[&str] = &["exit", "quit", "q"];

const PROMPT: &str = "dossier> ";

/// What one input line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum LineAction<'a> {
    Exit,
    Skip,
    Query(&'a str),
}

pub fn classify_line(line: &str) -> LineAction<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineAction::Skip
    } else if EXIT_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
        LineAction::Exit
    } else {
        LineAction::Query(trimmed)
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
    Interrupted,
}

/// CLI entry point for `dossier shell`.
pub async fn run_shell(config: &Config) -> Result<()> {
    let engine = config.search_engine()?;

    println!("[*] Loading sources from {} ...", config.sources.root.display());
    let outcome = loader::load_configured(config)?;
    let skipped = outcome.skipped().count();
    if skipped > 0 {
        println!("[!] Skipped {} unreadable source(s)", skipped);
    }

    if outcome.corpus.is_empty() {
        println!("[!] No records loaded. Exiting.");
        return Ok(());
    }

    println!(
        "[+] Loaded {} total records from {} source(s)",
        outcome.corpus.len(),
        outcome.reports.len() - skipped
    );
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    // Install the SIGINT listener before announcing readiness.
    tokio::select! {
        biased;
        res = &mut interrupt => {
            res?;
            println!("\n[*] Interrupted. Exiting...");
            return Ok(());
        }
        _ = std::future::ready(()) => {}
    }

    println!("[+] Ready. Type 'exit' to quit.");

    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    let mut stdout = io::stdout();

    match run_session(
        &engine,
        &outcome.corpus,
        &mut lines,
        interrupt,
        &mut stdout,
        interactive,
    )
    .await?
    {
        SessionEnd::Exit => println!("[*] Shutting down..."),
        SessionEnd::EndOfInput => println!(),
        SessionEnd::Interrupted => println!("\n[*] Interrupted. Exiting..."),
    }
    stdout.flush()?;

    Ok(())
}

/// Read `input` line by line on a dedicated thread.
///
/// The thread stops at end of input, after a read error, or once the
/// receiver is dropped.
pub fn spawn_line_reader<R>(input: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in input.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Drive the read-search-print loop until exit, end of input, or `interrupt`.
pub async fn run_session<F, W>(
    engine: &SearchEngine,
    corpus: &Corpus,
    lines: &mut mpsc::Receiver<io::Result<String>>,
    interrupt: F,
    out: &mut W,
    prompt: bool,
) -> Result<SessionEnd>
where
    F: Future<Output = io::Result<()>>,
    W: Write,
{
    tokio::pin!(interrupt);

    loop {
        if prompt {
            write!(out, "\n{}", PROMPT)?;
            out.flush()?;
        }

        let line = tokio::select! {
            line = lines.recv() => line,
            res = &mut interrupt => {
                res?;
                return Ok(SessionEnd::Interrupted);
            }
        };

        let Some(line) = line.transpose()? else {
            return Ok(SessionEnd::EndOfInput);
        };

        match classify_line(&line) {
            LineAction::Exit => return Ok(SessionEnd::Exit),
            LineAction::Skip => continue,
            LineAction::Query(query) => {
                if let Err(e) = handle_query(engine, corpus, query, out) {
                    tracing::debug!(query, "query failed: {:#}", e);
                    writeln!(out, "[!] Error: {:#}", e)?;
                }
            }
        }
    }
}

fn handle_query<W: Write>(
    engine: &SearchEngine,
    corpus: &Corpus,
    query: &str,
    out: &mut W,
) -> Result<()> {
    let outcome = engine.execute(corpus, query);
    writeln!(out, "[*] Search mode: {} | Query: '{}'", outcome.mode, outcome.query)?;
    writeln!(out)?;
    display::write_outcome(out, &outcome)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::Normalizer;
    use serde_json::json;
    use std::io::Cursor;

    fn corpus() -> Corpus {
        let normalizer = Normalizer::default();
        let rows = [
            json!({ "nama": "Andi Saputra", "nik": "3201" }),
            json!({ "nama": "Budi Santoso", "nik": "3202" }),
        ];
        Corpus::from_records(
            rows.iter()
                .map(|r| normalizer.normalize(r.as_object().unwrap(), "people.json")),
        )
    }

    async fn run(input: &str, prompt: bool) -> (SessionEnd, String) {
        let engine = SearchEngine::default();
        let corpus = corpus();
        let mut lines = spawn_line_reader(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        let end = run_session(
            &engine,
            &corpus,
            &mut lines,
            std::future::pending(),
            &mut out,
            prompt,
        )
        .await
        .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    async fn session(input: &str) -> (SessionEnd, String) {
        run(input, false).await
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line(""), LineAction::Skip);
        assert_eq!(classify_line("   "), LineAction::Skip);
        assert_eq!(classify_line("exit"), LineAction::Exit);
        assert_eq!(classify_line("  QUIT "), LineAction::Exit);
        assert_eq!(classify_line("Q"), LineAction::Exit);
        assert_eq!(classify_line("  andi  "), LineAction::Query("andi"));
        assert_eq!(classify_line("quitman"), LineAction::Query("quitman"));
    }

    #[tokio::test]
    async fn test_session_searches_until_exit() {
        let (end, text) = session("andi\n\nbudi santoso\nzzz\nexit\nandi\n").await;
        assert_eq!(end, SessionEnd::Exit);
        assert!(text.contains("Search mode: NICKNAME | Query: 'andi'"));
        assert!(text.contains("Search mode: FULL NAME | Query: 'budi santoso'"));
        assert!(text.contains("No results found for 'zzz'"));
        // Nothing after "exit" is searched.
        assert_eq!(text.matches("Query: 'andi'").count(), 1);
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let (end, text) = session("andi").await;
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(text.contains("ANDI SAPUTRA"));
    }

    #[tokio::test]
    async fn test_blank_lines_never_search() {
        let (end, text) = session("\n   \n\t\n").await;
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_written_when_interactive() {
        let (_, text) = run("q\n", true).await;
        assert!(text.contains(PROMPT));
    }

    #[tokio::test]
    async fn test_interrupt_ends_session_with_input_open() {
        let engine = SearchEngine::default();
        let corpus = corpus();
        // Sender kept alive: no line ever arrives and input never ends.
        let (_tx, mut lines) = mpsc::channel::<io::Result<String>>(1);
        let mut out = Vec::new();
        let end = run_session(
            &engine,
            &corpus,
            &mut lines,
            std::future::ready(Ok(())),
            &mut out,
            false,
        )
        .await
        .unwrap();
        assert_eq!(end, SessionEnd::Interrupted);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_read_error_ends_session() {
        let engine = SearchEngine::default();
        let corpus = corpus();
        let (tx, mut lines) = mpsc::channel(2);
        tx.send(Ok("andi".to_string())).await.unwrap();
        tx.send(Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")))
            .await
            .unwrap();
        let mut out = Vec::new();
        let result = run_session(
            &engine,
            &corpus,
            &mut lines,
            std::future::pending(),
            &mut out,
            false,
        )
        .await;
        assert!(result.is_err());
        assert!(String::from_utf8(out).unwrap().contains("ANDI SAPUTRA"));
    }
}
