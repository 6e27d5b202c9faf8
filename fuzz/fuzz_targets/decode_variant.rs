#![no_main]
use libfuzzer_sys::fuzz_target;
use tagwire::{decode_from_slice, Variant};

#[derive(Debug, Variant)]
enum Payload {
    Text(String),
    Number(i64),
    Flag(bool),
}

fuzz_target!(|data: &[u8]| {
    let _ = decode_from_slice::<Variant<Payload>>(data);
});
