// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_context_tag_json
// Purpose: Keep the serde and FromStr views of context tags in agreement
#![no_main]

use libfuzzer_sys::fuzz_target;
use safebind::BindingContext;

fuzz_target!(|data: &[u8]| {
    let Ok(tag) = std::str::from_utf8(data) else {
        return;
    };

    let parsed = tag.parse::<BindingContext>();
    let deserialized = serde_json::from_str::<BindingContext>(&format!("{tag:?}"));

    // A tag is a context exactly when serde says it is.
    match (parsed, deserialized) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        (a, b) => panic!("FromStr and serde disagree on {tag:?}: {a:?} vs {b:?}"),
    }
});
