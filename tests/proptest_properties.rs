//! Property-based tests backing the fungibility contract and the
//! length-prefix-economy property.
use proptest::prelude::*;
use tagwire::{decode_from_slice, encode_to_vec, WireType};

proptest! {
    #[test]
    fn i64_roundtrips_for_any_value(n in any::<i64>()) {
        let buf = encode_to_vec(&n).unwrap();
        let back: i64 = decode_from_slice(&buf).unwrap();
        prop_assert_eq!(back, n);
    }

    #[test]
    fn u64_roundtrips_for_any_value(n in any::<u64>()) {
        let buf = encode_to_vec(&n).unwrap();
        let back: u64 = decode_from_slice(&buf).unwrap();
        prop_assert_eq!(back, n);
    }

    #[test]
    fn string_roundtrips_for_any_value(s in ".*") {
        let buf = encode_to_vec(&s).unwrap();
        let back: String = decode_from_slice(&buf).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn byte_vec_roundtrips_for_any_value(v in proptest::collection::vec(any::<u8>(), 0..256)) {
        let buf = encode_to_vec(&v).unwrap();
        let back: Vec<u8> = decode_from_slice(&buf).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn non_integral_sequence_and_equal_arity_tuple_are_fungible(_seed in any::<u8>()) {
        let seq_shape = Vec::<String>::shape();
        let tuple_shape = <(String, String)>::shape();
        prop_assert!(tagwire::fungible(&seq_shape, &tuple_shape));
    }

    #[test]
    fn integer_shapes_are_never_fungible_across_width_or_sign(
        a in 0u8..4, b in 0u8..4
    ) {
        // index into a small closed set of distinct integer shapes; fungible
        // only when they're literally the same shape.
        let shapes = [
            tagwire::Shape::I32,
            tagwire::Shape::U32,
            tagwire::Shape::I64,
            tagwire::Shape::U64,
        ];
        let same = a == b;
        prop_assert_eq!(
            tagwire::fungible(&shapes[a as usize], &shapes[b as usize]),
            same
        );
    }
}

#[test]
fn length_prefix_economy_table() {
    let cases: &[(i64, usize)] = &[
        (-64, 1),
        (-65, 2),
        (127, 1),
        (128, 3), // exceeds i8's range, needs I16
        (255, 3),
        (256, 3),
        (32767, 3),
        (32768, 5),
        (i32::MAX as i64, 5),
        (i32::MAX as i64 + 1, 9),
        (u32::MAX as i64, 9),
        (u32::MAX as i64 + 1, 9),
    ];
    for &(n, expected_len) in cases {
        let buf = encode_to_vec(&n).unwrap();
        assert_eq!(buf.len(), expected_len, "wrong width for {n}");
    }
}
