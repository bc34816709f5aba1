#![no_main]
use libfuzzer_sys::fuzz_target;
use safemode::extract_scheme;

fuzz_target!(|data: &[u8]| {
    // A scheme is always a prefix of the value and ends in its colon
    if let Some(scheme) = extract_scheme(data) {
        assert!(data.starts_with(scheme));
        assert_eq!(scheme.last(), Some(&b':'));
        assert!(scheme.first().is_some_and(u8::is_ascii_alphabetic));
    }
});
