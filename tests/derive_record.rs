use tagwire::{decode_from_slice, encode_to_vec, Error, Record, WireType};

#[derive(Debug, PartialEq, Record)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, PartialEq, Record)]
struct Line {
    start: Point,
    end: Point,
}

#[derive(Debug, PartialEq, Record)]
struct Wrapped {
    value: u32,
}

#[test]
fn roundtrips_flat_record() {
    let p = Point { x: -3, y: 9 };
    let buf = encode_to_vec(&p).unwrap();
    assert_eq!(buf[0], 0xB9);
    assert_eq!(&buf[1..9], &2u64.to_le_bytes());
    let back: Point = decode_from_slice(&buf).unwrap();
    assert_eq!(back, p);
}

#[test]
fn roundtrips_nested_record() {
    let line = Line {
        start: Point { x: 0, y: 0 },
        end: Point { x: 10, y: 20 },
    };
    let buf = encode_to_vec(&line).unwrap();
    let back: Line = decode_from_slice(&buf).unwrap();
    assert_eq!(back, line);
}

#[test]
fn wrong_member_count_is_rejected() {
    let buf = encode_to_vec(&Point { x: 1, y: 2 }).unwrap();
    let mut corrupted = buf.clone();
    corrupted[1] = 5;
    assert_eq!(
        decode_from_slice::<Point>(&corrupted),
        Err(Error::InvalidMemberCount)
    );
}

#[test]
fn value_wrapper_is_fungible_with_bare_inner_type() {
    assert!(tagwire::fungible(&Wrapped::shape(), &u32::shape()));
    assert!(!tagwire::fungible(&Wrapped::shape(), &i32::shape()));
}

#[test]
fn value_wrapper_still_roundtrips_as_a_record() {
    // Fungibility (rule 15) lets a protocol substitute a bare value for a
    // value wrapper; it doesn't change the wrapper's own wire framing, which
    // is still an ordinary one-member `STC` record.
    let w = Wrapped { value: 300 };
    let buf = encode_to_vec(&w).unwrap();
    assert_eq!(buf[0], 0xB9);
    let back: Wrapped = decode_from_slice(&buf).unwrap();
    assert_eq!(back, w);
}
