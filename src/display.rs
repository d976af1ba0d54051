//! Result rendering for the terminal and for JSON consumers.
//!
//! Terminal output shows one block per hit: a header naming the source,
//! then a grid of the hit's non-empty fields in canonical order. Values
//! longer than [`VALUE_WIDTH`] columns wrap inside their cell.

use std::io::{self, Write};

use dossier_core::search::SearchOutcome;
use dossier_core::CanonicalRecord;

/// Maximum width of the value column before wrapping.
pub const VALUE_WIDTH: usize = 50;

const RULE_WIDTH: usize = 60;

/// Write a full search outcome: summary line, then one block per hit.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome<'_>) -> io::Result<()> {
    if outcome.hits.is_empty() {
        writeln!(out, "[!] No results found for '{}'", outcome.query)?;
        return Ok(());
    }

    writeln!(
        out,
        "[+] Found {} result(s) for '{}' (mode: {}):",
        outcome.hits.len(),
        outcome.query,
        outcome.mode
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for (i, record) in outcome.hits.iter().enumerate() {
        writeln!(out)?;
        write_record(out, i + 1, record)?;
        if i + 1 < outcome.hits.len() {
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        }
    }
    Ok(())
}

/// Write one hit as a header plus a field/value grid.
pub fn write_record<W: Write>(out: &mut W, index: usize, record: &CanonicalRecord) -> io::Result<()> {
    writeln!(out, "[ Result #{} | Source: {} ]", index, record.source())?;

    let rows: Vec<(&str, Vec<String>)> = record
        .populated()
        .map(|(field, value)| (field.label(), wrap(value, VALUE_WIDTH)))
        .collect();

    if rows.is_empty() {
        writeln!(out, "    No data fields available")?;
        return Ok(());
    }

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once("Field".len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .flat_map(|(_, lines)| lines.iter().map(|l| l.chars().count()))
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);

    let border = |fill: char| {
        format!(
            "+{}+{}+",
            fill.to_string().repeat(label_width + 2),
            fill.to_string().repeat(value_width + 2)
        )
    };

    writeln!(out, "{}", border('-'))?;
    write_row(out, "Field", "Value", label_width, value_width)?;
    writeln!(out, "{}", border('='))?;
    for (label, lines) in &rows {
        for (j, line) in lines.iter().enumerate() {
            let label = if j == 0 { *label } else { "" };
            write_row(out, label, line, label_width, value_width)?;
        }
        writeln!(out, "{}", border('-'))?;
    }
    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    label: &str,
    value: &str,
    label_width: usize,
    value_width: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "| {}{} | {}{} |",
        label,
        " ".repeat(label_width - label.chars().count()),
        value,
        " ".repeat(value_width - value.chars().count())
    )
}

/// Write hits as a JSON array of records.
pub fn write_json<W: Write>(out: &mut W, hits: &[&CanonicalRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, hits)?;
    writeln!(out)?;
    Ok(())
}

/// Greedy word wrap at `width` characters; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::{Corpus, Normalizer, SearchEngine};
    use serde_json::json;

    fn render(outcome: &SearchOutcome<'_>) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn corpus() -> Corpus {
        let normalizer = Normalizer::default();
        let raw = json!({ "nama": "Andi Saputra", "nik": "3201", "no_hp": "0812" });
        Corpus::from_records(vec![normalizer.normalize(raw.as_object().unwrap(), "pegawai.json")])
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![""]);
        for line in wrap(&"lorem ipsum ".repeat(20), VALUE_WIDTH) {
            assert!(line.chars().count() <= VALUE_WIDTH);
        }
    }

    #[test]
    fn test_no_results() {
        let corpus = corpus();
        let outcome = SearchEngine::default().execute(&corpus, "zzz");
        assert_eq!(render(&outcome), "[!] No results found for 'zzz'\n");
    }

    #[test]
    fn test_result_block_shows_only_populated_fields() {
        let corpus = corpus();
        let outcome = SearchEngine::default().execute(&corpus, "andi");
        let text = render(&outcome);

        assert!(text.contains("Found 1 result(s) for 'andi' (mode: NICKNAME)"));
        assert!(text.contains("[ Result #1 | Source: pegawai.json ]"));
        assert!(text.contains("| Nama     | ANDI SAPUTRA |"));
        assert!(text.contains("| NIK      | 3201         |"));
        assert!(text.contains("| Nomor Hp | 0812         |"));
        assert!(!text.contains("Alamat"));
    }

    #[test]
    fn test_json_output() {
        let corpus = corpus();
        let hits = SearchEngine::default().search(&corpus, "andi");
        let mut buf = Vec::new();
        write_json(&mut buf, &hits).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            json!([{
                "name": "ANDI SAPUTRA",
                "national_id": "3201",
                "phone": "0812",
                "source": "pegawai.json"
            }])
        );
    }
}
