//! SipHash: `hash(bytes, k0, k1) -> u64`. A table's hash must be derived
//! once, at declaration time — i.e. computable at compile time from the
//! declared name literal. `siphasher`'s `Hasher`-trait-based API can't be
//! called in a `const` context, so this module carries a small const-fn
//! SipHash-1-3 (one compression round, three finalization rounds, the
//! variant Rust's own standard library settled on for `HashMap`) used only
//! to produce table hashes; runtime hashing elsewhere in the crate, if any
//! is ever needed, should reach for `siphasher` directly instead of this.
const fn rotl(x: u64, b: u32) -> u64 {
    x.rotate_left(b)
}

const fn sipround(v0: u64, v1: u64, v2: u64, v3: u64) -> (u64, u64, u64, u64) {
    let v0 = v0.wrapping_add(v1);
    let v1 = rotl(v1, 13);
    let v1 = v1 ^ v0;
    let v0 = rotl(v0, 32);
    let v2 = v2.wrapping_add(v3);
    let v3 = rotl(v3, 16);
    let v3 = v3 ^ v2;
    let v0 = v0.wrapping_add(v3);
    let v3 = rotl(v3, 21);
    let v3 = v3 ^ v0;
    let v2 = v2.wrapping_add(v1);
    let v1 = rotl(v1, 17);
    let v1 = v1 ^ v2;
    let v2 = rotl(v2, 32);
    (v0, v1, v2, v3)
}

/// `hash(bytes, k0, k1) -> u64`, computable in a `const` context.
pub const fn hash(bytes: &[u8], k0: u64, k1: u64) -> u64 {
    let mut v0: u64 = 0x736f_6d65_7073_6575 ^ k0;
    let mut v1: u64 = 0x646f_7261_6e64_6f6d ^ k1;
    let mut v2: u64 = 0x6c79_6765_6e65_7261 ^ k0;
    let mut v3: u64 = 0x7465_6462_7974_6573 ^ k1;

    let len = bytes.len();
    let blocks = len / 8;
    let mut i = 0;
    while i < blocks {
        let b = i * 8;
        let m = u64::from_le_bytes([
            bytes[b],
            bytes[b + 1],
            bytes[b + 2],
            bytes[b + 3],
            bytes[b + 4],
            bytes[b + 5],
            bytes[b + 6],
            bytes[b + 7],
        ]);
        v3 ^= m;
        let (a, b2, c, d) = sipround(v0, v1, v2, v3);
        v0 = a;
        v1 = b2;
        v2 = c;
        v3 = d;
        v0 ^= m;
        i += 1;
    }

    let tail_start = blocks * 8;
    let tail_len = len - tail_start;
    let mut last_block = [0u8; 8];
    let mut j = 0;
    while j < tail_len {
        last_block[j] = bytes[tail_start + j];
        j += 1;
    }
    last_block[7] = len as u8;
    let m = u64::from_le_bytes(last_block);

    v3 ^= m;
    let (a, b2, c, d) = sipround(v0, v1, v2, v3);
    v0 = a;
    v1 = b2;
    v2 = c;
    v3 = d;
    v0 ^= m;

    v2 ^= 0xff;
    let (a, b2, c, d) = sipround(v0, v1, v2, v3);
    let (a, b2, c, d) = sipround(a, b2, c, d);
    let (a, b2, c, d) = sipround(a, b2, c, d);
    v0 = a;
    v1 = b2;
    v2 = c;
    v3 = d;

    v0 ^ v1 ^ v2 ^ v3
}

/// Fixed keys every table hash is derived with.
pub const TABLE_HASH_K0: u64 = 0xBAAD_F00D_DEAD_BEEF;
pub const TABLE_HASH_K1: u64 = 0x0123_4567_89AB_CDEF;

/// A table's declared-name hash: `hash(name.as_bytes(), K0, K1)`. Derived
/// once, at declaration time, from the table's declared name string; what
/// `#[derive(Table)]` emits as `const HASH: u64`.
pub const fn table_hash(name: &str) -> u64 {
    hash(name.as_bytes(), TABLE_HASH_K0, TABLE_HASH_K1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_distinct() {
        assert_eq!(table_hash("MyTable"), table_hash("MyTable"));
        assert_ne!(table_hash("MyTable"), table_hash("OtherTable"));
    }

    #[test]
    fn matches_siphasher_reference() {
        use siphasher::sip::SipHasher13;
        use std::hash::Hasher;

        for name in ["", "a", "MyTable", "a somewhat longer declared name"] {
            let mut h = SipHasher13::new_with_keys(TABLE_HASH_K0, TABLE_HASH_K1);
            h.write(name.as_bytes());
            assert_eq!(h.finish(), hash(name.as_bytes(), TABLE_HASH_K0, TABLE_HASH_K1));
        }
    }

    #[test]
    fn matches_siphasher_reference_on_random_inputs() {
        use rand::Rng;
        use siphasher::sip::SipHasher13;
        use std::hash::Hasher;

        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let len = rng.gen_range(0..256);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let mut h = SipHasher13::new_with_keys(TABLE_HASH_K0, TABLE_HASH_K1);
            h.write(&bytes);
            assert_eq!(h.finish(), hash(&bytes, TABLE_HASH_K0, TABLE_HASH_K1));
        }
    }

    #[test]
    fn evaluates_at_compile_time() {
        const H: u64 = table_hash("CompileTimeTable");
        assert_eq!(H, table_hash("CompileTimeTable"));
    }
}
