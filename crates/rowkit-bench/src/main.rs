//! Benchmark for keep-first folds and label-based field access.
//!
//! Loads a JSON array of `{ "key", "value", "note" }` entries (or synthesizes
//! one), folds it into ordered and hashed maps, and reads every entry back
//! through record accessors.

use std::fs;
use std::path::Path;
use std::time::Instant;

use rowkit::prelude::*;
use rowkit::{labels, record};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// =============================================================================
// DATA
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawEntry {
    key: String,
    value: String,
    note: Option<String>,
}

labels! {
    Key = "key",
    Value = "value",
    Note = "note",
}

record! {
    #[derive(Debug, Clone)]
    struct Entry {
        required {
            Key => key: String,
            Value => value: String,
        }
        optional {
            Note => note: String,
        }
    }
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let mut entry = Entry::new(raw.key, raw.value);
        set_optional(Note, &mut entry, raw.note);
        entry
    }
}

/// Deterministic entries with roughly one key collision in four.
fn synthesize(count: usize) -> Vec<RawEntry> {
    let distinct = (count * 3 / 4).max(1);
    (0..count)
        .map(|i| RawEntry {
            key: format!("key-{:08}", (i * 7919) % distinct),
            value: format!("value-{i}"),
            note: (i % 3 == 0).then(|| format!("note-{i}")),
        })
        .collect()
}

fn load(data_path: &str, count: usize) -> Vec<RawEntry> {
    if !Path::new(data_path).exists() {
        warn!(path = data_path, count, "dataset not found, synthesizing entries");
        return synthesize(count);
    }

    let json_data = fs::read_to_string(data_path).expect("Failed to read dataset");
    serde_json::from_str(&json_data).expect("Failed to parse JSON")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "../../data/entries.json".to_string());
    let count = std::env::args()
        .nth(2)
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(200_000);

    println!("Loading entries from: {}", data_path);

    let load_start = Instant::now();
    let raw = load(&data_path, count);
    let load_time = load_start.elapsed();
    println!("Loaded {} entries in {:?}", raw.len(), load_time);

    let convert_start = Instant::now();
    let entries: Vec<Entry> = raw.into_iter().map(Entry::from).collect();
    let convert_time = convert_start.elapsed();
    println!("Converted to records in {:?}", convert_time);

    // =========================================================================
    // FOLDS
    // =========================================================================

    let ordered_start = Instant::now();
    let ordered = fold_map_first(&entries, |e| Some((e.req(Key).as_str(), e.req(Value).as_str())));
    let ordered_time = ordered_start.elapsed();

    println!(
        "\nKeep-first fold (ordered): {} keys from {} entries in {:?}",
        ordered.len(),
        entries.len(),
        ordered_time
    );

    let unordered_start = Instant::now();
    let unordered =
        fold_map_first_unordered(&entries, |e| Some((e.req(Key).as_str(), e.req(Value).as_str())));
    let unordered_time = unordered_start.elapsed();

    println!(
        "Keep-first fold (hashed): {} keys in {:?}",
        unordered.len(),
        unordered_time
    );
    println!(
        "  Speedup vs ordered: {:.2}x",
        ordered_time.as_secs_f64() / unordered_time.as_secs_f64()
    );

    assert_eq!(ordered.len(), unordered.len(), "Both folds should see the same keys");
    for (key, value) in &ordered {
        assert_eq!(unordered.get(key), Some(value), "Folds disagree on first value");
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    const ACCESS_ITERS: u32 = 10;

    let access_start = Instant::now();
    let mut with_note = 0usize;
    let mut total_len = 0usize;
    for _ in 0..ACCESS_ITERS {
        with_note = 0;
        total_len = 0;
        for entry in &entries {
            total_len += get_required(Value, entry).len();
            if let Some(note) = get_optional(Note, entry) {
                with_note += 1;
                total_len += note.len();
            }
        }
    }
    let access_time = access_start.elapsed() / ACCESS_ITERS;

    println!(
        "\nField access: {:?} per pass (avg of {} iterations)",
        access_time, ACCESS_ITERS
    );
    println!("  - {} entries with a note, {} bytes read", with_note, total_len);

    info!(
        entries = entries.len(),
        keys = ordered.len(),
        "benchmark complete"
    );
}
