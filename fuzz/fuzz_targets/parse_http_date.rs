#![no_main]
use http_fields::date::parse_http_date;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        parse_http_date(text).ok();
    }
});
