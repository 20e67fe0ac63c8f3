#![allow(dead_code)]

pub use tasklink_test_utils::builders;
pub use tasklink_test_utils::init_tracing;
pub use tasklink_test_utils::with_timeout;
pub use tasklink_test_utils::recording_sink;

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh temporary `.toml` file.
pub fn board_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file
}
