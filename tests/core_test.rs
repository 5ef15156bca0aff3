//! End-to-end coverage of the codec: literal encode/decode vectors for every
//! value kind, the canonicalization guarantees, and property tests over
//! generated value trees.

use std::collections::BTreeMap;

use benc::{decode, decoding, encode, Value};
use num_bigint::BigInt;
use proptest::prelude::*;

// -----------------------------------------------------------------------------
// Literal vectors
// -----------------------------------------------------------------------------

#[test]
fn string_test_pairs() {
    let pairs = [
        ("", "0:"),
        ("hello", "5:hello"),
        ("goodbye", "7:goodbye"),
        ("hello world", "11:hello world"),
        ("1-5%3~]+=\\| []>.,`??", "20:1-5%3~]+=\\| []>.,`??"),
    ];

    for (original, expected_encoding) in &pairs {
        let value = Value::from(*original);
        let encoded = encode(&value).unwrap();
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());
        assert_eq!(decode(&encoded).unwrap(), value);
    }
}

#[test]
fn integer_test_pairs() {
    let pairs = [
        (BigInt::from(0), "i0e"),
        (BigInt::from(3), "i3e"),
        (BigInt::from(-3), "i-3e"),
        (BigInt::from(1234567890i64), "i1234567890e"),
        (BigInt::from(-1234567890i64), "i-1234567890e"),
        (BigInt::from(i64::MAX), "i9223372036854775807e"),
        (BigInt::from(i64::MIN), "i-9223372036854775808e"),
        (
            BigInt::parse_bytes(
                b"123456789012345678901234567890123456789012345678901234567890",
                10,
            )
            .unwrap(),
            "i123456789012345678901234567890123456789012345678901234567890e",
        ),
        (
            BigInt::parse_bytes(
                b"-123456789012345678901234567890123456789012345678901234567890",
                10,
            )
            .unwrap(),
            "i-123456789012345678901234567890123456789012345678901234567890e",
        ),
    ];

    for (original, expected_encoding) in &pairs {
        let value = Value::Integer(original.clone());
        let encoded = encode(&value).unwrap();
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());
        assert_eq!(decode(&encoded).unwrap(), value);
    }
}

#[test]
fn two_pow_128_round_trips_exactly() {
    let literal = b"i340282366920938463463374607431768211456e";
    let value = decode(literal).unwrap();
    assert_eq!(value.as_integer(), Some(&(BigInt::from(1) << 128u32)));
    assert_eq!(encode(&value).unwrap(), &literal[..]);
}

#[test]
fn list_test_pairs() {
    let pairs = [
        (Value::List(Vec::new()), "le"),
        (
            Value::List(vec![Value::from("abra"), Value::from("cadabra")]),
            "l4:abra7:cadabrae",
        ),
        (
            Value::List(vec![Value::from("spam"), Value::from("eggs")]),
            "l4:spam4:eggse",
        ),
        (
            Value::List(vec![
                Value::List(vec![
                    Value::from("list"),
                    Value::from("of"),
                    Value::from("lists"),
                ]),
                Value::List(vec![Value::from("like"), Value::from("omygawd!")]),
            ]),
            "ll4:list2:of5:listsel4:like8:omygawd!ee",
        ),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = encode(original).unwrap();
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());
        assert_eq!(&decode(&encoded).unwrap(), original);
    }
}

#[test]
fn dict_test_pairs() {
    let pairs = [
        (Value::Dict(Vec::new()), "de"),
        (
            Value::Dict(vec![
                (b"cow".to_vec(), Value::from("moo")),
                (b"spam".to_vec(), Value::from("eggs")),
            ]),
            "d3:cow3:moo4:spam4:eggse",
        ),
        (
            Value::Dict(vec![(
                b"spam".to_vec(),
                Value::List(vec![Value::from("a"), Value::from("b")]),
            )]),
            "d4:spaml1:a1:bee",
        ),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = encode(original).unwrap();
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());
        assert_eq!(&decode(&encoded).unwrap(), original);
    }
}

// -----------------------------------------------------------------------------
// Strictness
// -----------------------------------------------------------------------------

#[test]
fn rejected_literals() {
    use decoding::Error;

    assert!(matches!(decode(b"i-0e"), Err(Error::InvalidInteger { .. })));
    assert!(matches!(decode(b"i03e"), Err(Error::InvalidInteger { .. })));
    assert!(matches!(
        decode(b"d4:spam4:eggs3:cow3:mooe"),
        Err(Error::UnsortedKeys { .. })
    ));
    assert!(matches!(decode(b"x"), Err(Error::UnknownTag { .. })));
    assert!(matches!(decode(b"i3ei3e"), Err(Error::TrailingBytes { .. })));
}

#[test]
fn embedded_end_bytes_do_not_truncate_containers() {
    // `l1:ee` is a list holding the one-byte string "e"; finding the list's
    // terminator by scanning for the next `e` byte would cut it short
    assert_eq!(decode(b"l1:ee").unwrap(), Value::List(vec![Value::from("e")]));
    assert_eq!(
        decode(b"d1:e1:ee").unwrap(),
        Value::Dict(vec![(b"e".to_vec(), Value::from("e"))])
    );
}

#[test]
fn deep_nesting_fails_cleanly() {
    let mut msg = Vec::new();
    msg.extend(std::iter::repeat(b'l').take(100_000));
    msg.extend(std::iter::repeat(b'e').take(100_000));

    // fails with the dedicated error instead of blowing the call stack
    assert!(matches!(
        decode(&msg),
        Err(decoding::Error::DepthExceeded { .. })
    ));
}

#[test]
fn torrent_shaped_input_round_trips() {
    let buf: &[u8] = b"d8:announce30:http://tracker.example.com:80/4:infod6:lengthi1048576e4:name8:file.iso12:piece lengthi262144eee";

    let value = decode(buf).unwrap();
    assert_eq!(
        value.get("announce").and_then(Value::as_str),
        Some("http://tracker.example.com:80/")
    );
    assert_eq!(
        value
            .get("info")
            .and_then(|info| info.get("length"))
            .and_then(Value::as_integer),
        Some(&BigInt::from(1048576))
    );
    assert_eq!(encode(&value).unwrap(), buf);
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i128>().prop_map(Value::from),
        proptest::collection::vec(any::<u8>(), 0..24).prop_map(Value::Bytes),
    ];

    // btree_map keeps generated dictionary keys unique
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            proptest::collection::btree_map(
                proptest::collection::vec(any::<u8>(), 0..12),
                inner,
                0..6,
            )
            .prop_map(|map: BTreeMap<Vec<u8>, Value>| Value::Dict(map.into_iter().collect())),
        ]
    })
}

/// Reverse the entry order of every dictionary in the tree, leaving the
/// contents alone.
fn scramble(value: Value) -> Value {
    match value {
        Value::List(elements) => Value::List(elements.into_iter().map(scramble).collect()),
        Value::Dict(entries) => Value::Dict(
            entries
                .into_iter()
                .rev()
                .map(|(key, value)| (key, scramble(value)))
                .collect(),
        ),
        atom => atom,
    }
}

proptest! {
    #[test]
    fn round_trip(value in value_strategy()) {
        let encoded = encode(&value).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), value);
    }

    #[test]
    fn reencoding_is_stable(value in value_strategy()) {
        let encoded = encode(&value).unwrap();
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(encode(&decoded).unwrap(), encoded);
    }

    #[test]
    fn dict_entry_order_does_not_affect_encoding(value in value_strategy()) {
        let scrambled = scramble(value.clone());
        prop_assert_eq!(encode(&scrambled).unwrap(), encode(&value).unwrap());
    }
}
