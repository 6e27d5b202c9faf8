#![no_main]
use libfuzzer_sys::fuzz_target;
use tagwire::{decode_from_slice, Record};

#[derive(Debug, Record)]
struct Point3 {
    x: i32,
    y: i32,
    z: i32,
}

fuzz_target!(|data: &[u8]| {
    let _ = decode_from_slice::<Point3>(data);
});
