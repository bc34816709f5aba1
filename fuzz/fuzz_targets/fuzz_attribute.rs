#![no_main]
use libfuzzer_sys::fuzz_target;
use safemode::{is_attribute_allowed, is_tag_allowed};

fuzz_target!(|data: &[u8]| {
    // Split the input into tag, name and value at the first two NUL bytes
    let mut parts = data.splitn(3, |&b| b == 0);
    let tag = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();

    let _ = is_tag_allowed(tag);
    let first = is_attribute_allowed(tag, name, value);
    assert_eq!(first, is_attribute_allowed(tag, name, value));
});
