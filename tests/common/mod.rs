//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn write_temp_config(contents: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "origin-map-test-{}-{}.toml",
        std::process::id(),
        n
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

/// The origin map cases exercised against a resolver: `(input, [(repo, origin)])`.
///
/// An empty origin means no mapping.
#[allow(dead_code)]
pub const MAPPING_CASES: &[(&str, &[(&str, &str)])] = &[
    (
        "github.com/!https://github.com/%.git",
        &[
            ("github.com/gorilla/mux", "https://github.com/gorilla/mux.git"),
            ("github.com/gorilla/pat", "https://github.com/gorilla/pat.git"),
        ],
    ),
    ("local/!local/%", &[("local/foo", "local/foo")]),
    (
        "local/!local/% github.com/!https://github.com/%.git",
        &[
            ("github.com/gorilla/mux", "https://github.com/gorilla/mux.git"),
            ("github.com/gorilla/pat", "https://github.com/gorilla/pat.git"),
            ("local/foo", "local/foo"),
            ("nomatch", ""),
        ],
    ),
];
