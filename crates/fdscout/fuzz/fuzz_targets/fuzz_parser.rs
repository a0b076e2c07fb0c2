//! Fuzz target for the data loader.
//!
//! This fuzzer tests that the delimited-text loader:
//! 1. Never panics on malformed input
//! 2. Only returns tables whose rows match the header width

#![no_main]

use libfuzzer_sys::fuzz_target;
use fdscout::Parser;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(table) = Parser::new().parse_bytes(data) {
        let width = table.column_count();
        assert!(table.rows.iter().all(|row| row.len() == width));
        assert!(table.row_count() > 0);
    }
});
