//! Fuzz target for discovery over arbitrary parsed tables.
//!
//! Any table the loader accepts must be scored without panicking, and every
//! reported support must lie in [0, 1].

#![no_main]

use libfuzzer_sys::fuzz_target;
use fdscout::{Parser, discover_fds};

fuzz_target!(|data: &[u8]| {
    // Keep tables small; enumeration is exponential in width.
    if data.len() > 4_096 {
        return;
    }

    let Ok(table) = Parser::new().parse_bytes(data) else {
        return;
    };
    if table.column_count() > 8 {
        return;
    }

    if let Ok(fds) = discover_fds(&table, 2, 0.0) {
        assert!(fds.iter().all(|fd| (0.0..=1.0).contains(&fd.support)));
    }
});
