#![no_main]
use http_fields::{decoder::decode_fields, header::FieldMap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut map = FieldMap::new();
    decode_fields(data, &mut map).ok();
});
