// IDE: This is a cargo-fuzz target, not a normal module
// Run with: cargo fuzz run fuzz_bridge
// Purpose: Check the bridge's fail-closed invariants hold for every context
#![no_main]

use libfuzzer_sys::fuzz_target;
use safebind::{BindingContext, bridge};

fuzz_target!(|data: &[u8]| {
    let Some((selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(s) = std::str::from_utf8(rest) else {
        return;
    };

    let context = match selector % 7 {
        0 => BindingContext::String,
        1 => BindingContext::Constant,
        2 => BindingContext::Url,
        3 => BindingContext::ResourceUrl,
        4 => BindingContext::Html,
        5 => BindingContext::Javascript,
        _ => BindingContext::Style,
    };

    let result = bridge(s.into(), context);

    match context {
        // Inert sinks pass every string through untouched.
        BindingContext::String | BindingContext::Constant => {
            assert_eq!(s, result.expect("inert sinks accept any string"));
        }
        // A URL that passes must come back unchanged.
        BindingContext::Url => {
            if let Ok(bound) = result {
                assert_eq!(s, bound);
            }
        }
        // These sinks must never accept anything.
        BindingContext::ResourceUrl
        | BindingContext::Html
        | BindingContext::Javascript
        | BindingContext::Style => {
            assert!(result.is_err());
        }
    }
});
