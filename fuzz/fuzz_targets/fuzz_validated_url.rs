// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_validated_url
// Purpose: Find scheme-allowlist bypasses and crashes
// Focus: Security-critical input validation
#![no_main]

use libfuzzer_sys::fuzz_target;
use safebind::ValidatedUrl;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string (fuzzer generates random bytes)
    if let Ok(s) = std::str::from_utf8(data) {
        let input = s.to_string();

        // Panics and hangs are what we hunt; additionally, anything that
        // parses must come back out byte-for-byte identical.
        if let Ok(url) = ValidatedUrl::parse(input) {
            assert_eq!(s, url.as_ref());
        }
    }
});
