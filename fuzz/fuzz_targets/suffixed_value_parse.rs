// fuzz/fuzz_targets/suffixed_value_parse.rs
#![no_main]
use libfuzzer_sys::fuzz_target;
use metrics::{Unit, parse_suffixed};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for unit in [Unit::Percent, Unit::NanosPerOp] {
            if let Some(value) = parse_suffixed(text, unit) {
                assert!(value.is_finite());
            }
        }
    }
});
