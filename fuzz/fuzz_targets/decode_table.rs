#![no_main]
use libfuzzer_sys::fuzz_target;
use tagwire::{decode_from_slice, Record, Table};

#[derive(Debug, Table)]
struct Profile {
    #[tagwire(id = 1)]
    name: Option<String>,
    #[tagwire(id = 2)]
    age: Option<u32>,
    #[tagwire(id = 3)]
    address: Option<Address>,
}

#[derive(Debug, Record)]
struct Address {
    line1: String,
    zip: u32,
}

fuzz_target!(|data: &[u8]| {
    let _ = decode_from_slice::<Profile>(data);
});
