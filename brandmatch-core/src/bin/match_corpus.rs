//! Corpus Matching Driver
//!
//! Thin driver around the matching engine: loads a synonym vocabulary
//! and a dialogue corpus, builds the variant index, matches every
//! dialogue, and writes one JSON record per dialogue. All
//! serialization and hard-failure propagation for the pipeline's
//! matching step lives here; the engine itself never touches a file.
//!
//! ## Usage
//!
//! ```bash
//! match_corpus <synonyms.json> <dialogues.jsonl> [output.jsonl]
//! ```
//!
//! - `synonyms.json`: JSON array of generator records, one per brand
//! - `dialogues.jsonl`: one dialogue record per line
//!   (`{"id": ..., "text": ..., "ground_truth": ...}`)
//! - `output.jsonl`: one match record per dialogue; stdout when omitted
//!
//! Set `RUST_LOG` to control log verbosity (defaults to `info`).

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use brandmatch_core::{match_corpus, IndexBuilder};
use brandmatch_types::{Dialogue, SynonymRecord};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: match_corpus <synonyms.json> <dialogues.jsonl> [output.jsonl]");
        std::process::exit(1);
    }

    let synonyms_path = &args[1];
    let dialogues_path = &args[2];
    let output_path = args.get(3);

    let records = load_synonyms(synonyms_path)?;
    let dialogues = load_dialogues(dialogues_path)?;

    let build_start = Instant::now();
    let mut builder = IndexBuilder::new();
    for record in &records {
        builder.add_record(record);
    }
    let index = builder.build();
    let build_elapsed = build_start.elapsed();

    let match_start = Instant::now();
    let results = match_corpus(&index, &dialogues);
    let match_elapsed = match_start.elapsed();

    match output_path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create output file {path}"))?;
            write_results(&results, BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            write_results(&results, BufWriter::new(stdout.lock()))?;
        }
    }

    let with_matches = results
        .iter()
        .filter(|r| !r.candidates.is_empty())
        .count();
    let total_candidates: usize = results.iter().map(|r| r.candidates.len()).sum();

    eprintln!("--------------------------------");
    eprintln!("Index       : {}", index.stats());
    eprintln!("Build time  : {:.3} s", build_elapsed.as_secs_f64());
    eprintln!("Dialogues   : {}", results.len());
    eprintln!("With matches: {with_matches}");
    eprintln!("Candidates  : {total_candidates}");
    eprintln!("Match time  : {:.3} s", match_elapsed.as_secs_f64());
    eprintln!("--------------------------------");

    Ok(())
}

fn load_synonyms(path: &str) -> Result<Vec<SynonymRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read synonyms file {path}"))?;
    let records: Vec<SynonymRecord> =
        serde_json::from_str(&raw).with_context(|| format!("malformed synonyms file {path}"))?;
    Ok(records)
}

fn load_dialogues(path: &str) -> Result<Vec<Dialogue>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dialogues file {path}"))?;

    let mut dialogues = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let dialogue: Dialogue = serde_json::from_str(line)
            .with_context(|| format!("malformed dialogue record at {path}:{}", line_no + 1))?;
        dialogues.push(dialogue);
    }
    Ok(dialogues)
}

fn write_results<W: Write>(
    results: &[brandmatch_types::DialogueMatches],
    mut out: W,
) -> Result<()> {
    for record in results {
        serde_json::to_writer(&mut out, record).context("failed to serialize match record")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
