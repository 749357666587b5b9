//! Fuzz target for `terraform-validator.yaml` parsing.
//!
//! Goal: The override parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_override_parser
//! ```

#![no_main]

use camino::Utf8Path;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes, not just UTF-8: the file is read from disk as-is.
    let _ = tfvalidator_settings::parse_override(Utf8Path::new("terraform-validator.yaml"), data);
});
