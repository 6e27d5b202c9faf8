use tagwire::{decode_from_slice, encode_to_vec, Error, Table};

#[derive(Debug, Default, PartialEq, Table)]
#[tagwire(name = "Profile")]
#[tagwire(deleted(id = 3, ty = String))]
struct ProfileV2 {
    #[tagwire(id = 1)]
    name: Option<String>,
    #[tagwire(id = 2)]
    age: Option<u32>,
}

// A narrower schema generation: knows only about `name`, not `age`, and has
// already forgotten the `nickname` field `ProfileV2` still declares deleted.
#[derive(Debug, Default, PartialEq, Table)]
#[tagwire(name = "Profile")]
struct ProfileV1 {
    #[tagwire(id = 1)]
    name: Option<String>,
}

#[test]
fn same_declared_name_hashes_identically() {
    assert_eq!(ProfileV1::HASH, ProfileV2::HASH);
}

#[test]
fn roundtrips_all_present() {
    let p = ProfileV2 {
        name: Some("Ada".to_string()),
        age: Some(36),
    };
    let buf = encode_to_vec(&p).unwrap();
    let back: ProfileV2 = decode_from_slice(&buf).unwrap();
    assert_eq!(back, p);
}

#[test]
fn forward_compatible_narrower_reader_ignores_unknown_field() {
    let writer = ProfileV2 {
        name: Some("Grace".to_string()),
        age: Some(85),
    };
    let buf = encode_to_vec(&writer).unwrap();

    let reader: ProfileV1 = decode_from_slice(&buf).unwrap();
    assert_eq!(reader.name, Some("Grace".to_string()));
}

#[test]
fn backward_compatible_wider_reader_clears_missing_field() {
    let writer = ProfileV1 {
        name: Some("Alan".to_string()),
    };
    let buf = encode_to_vec(&writer).unwrap();

    let reader: ProfileV2 = decode_from_slice(&buf).unwrap();
    assert_eq!(reader.name, Some("Alan".to_string()));
    assert_eq!(reader.age, None);
}

#[test]
fn hash_mismatch_between_unrelated_tables_is_rejected() {
    #[derive(Debug, Default, Table)]
    struct Unrelated {
        #[tagwire(id = 1)]
        name: Option<String>,
    }

    let writer = Unrelated {
        name: Some("x".to_string()),
    };
    let buf = encode_to_vec(&writer).unwrap();
    assert_eq!(
        decode_from_slice::<ProfileV1>(&buf),
        Err(Error::InvalidTableHash)
    );
}

#[test]
fn absent_fields_are_never_written() {
    let p = ProfileV2 {
        name: None,
        age: None,
    };
    let buf = encode_to_vec(&p).unwrap();
    // TAB | hash(8) | present_count(8) == 0, nothing else.
    assert_eq!(buf.len(), 1 + 8 + 8);
}
