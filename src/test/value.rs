use crate::{
    error::ErrorKind, to_value, ByteArray, CompoundMap, CompoundValue, IntArray, LongArray, Tag,
    Value,
};

use super::{builder::Builder, Single};

fn compound(entries: Vec<(&str, Value)>) -> Value {
    entries.into_iter().collect::<CompoundValue>().into()
}

#[test]
fn short_payload() {
    assert_eq!(vec![0x7f, 0xff], Value::Short(32767).to_bytes(None).unwrap());
}

#[test]
fn named_compound() {
    let v = compound(vec![("name", "Bananrama".into())]);
    let expected = Builder::new()
        .start_compound("hello world")
        .string("name", "Bananrama")
        .end_compound()
        .build();

    assert_eq!(expected, v.to_bytes(Some("hello world")).unwrap());
}

#[test]
fn servers() {
    let servers = Value::List(vec![
        compound(vec![
            ("ip", "manwe.kloenk.dev".into()),
            ("name", "Minecraft Server".into()),
        ]),
        compound(vec![
            ("ip", "mc.example.com".into()),
            ("name", "Example server".into()),
        ]),
    ]);
    let v = compound(vec![("servers", servers)]);

    let expected = vec![
        0x0A, 0x00, 0x00, 0x09, 0x00, 0x07, 0x73, 0x65, 0x72, 0x76, 0x65, 0x72, 0x73, 0x0A, 0x00,
        0x00, 0x00, 0x02, 0x08, 0x00, 0x02, 0x69, 0x70, 0x00, 0x10, 0x6D, 0x61, 0x6E, 0x77, 0x65,
        0x2E, 0x6B, 0x6C, 0x6F, 0x65, 0x6E, 0x6B, 0x2E, 0x64, 0x65, 0x76, 0x08, 0x00, 0x04, 0x6E,
        0x61, 0x6D, 0x65, 0x00, 0x10, 0x4D, 0x69, 0x6E, 0x65, 0x63, 0x72, 0x61, 0x66, 0x74, 0x20,
        0x53, 0x65, 0x72, 0x76, 0x65, 0x72, 0x00, 0x08, 0x00, 0x02, 0x69, 0x70, 0x00, 0x0E, 0x6D,
        0x63, 0x2E, 0x65, 0x78, 0x61, 0x6D, 0x70, 0x6C, 0x65, 0x2E, 0x63, 0x6F, 0x6D, 0x08, 0x00,
        0x04, 0x6E, 0x61, 0x6D, 0x65, 0x00, 0x0E, 0x45, 0x78, 0x61, 0x6D, 0x70, 0x6C, 0x65, 0x20,
        0x73, 0x65, 0x72, 0x76, 0x65, 0x72, 0x00, 0x00,
    ];

    assert_eq!(expected, v.to_bytes(Some("")).unwrap());
}

#[test]
fn empty_list() {
    let v = Value::List(vec![]);
    assert_eq!(Some(Tag::End), v.element_tag());
    assert_eq!(vec![0, 0, 0, 0, 0], v.to_bytes(None).unwrap());
}

#[test]
fn heterogeneous_list() {
    let v = Value::List(vec![Value::Int(1), Value::from("two")]);
    let err = v.to_bytes(None).unwrap_err();
    assert_eq!(ErrorKind::WrongValueType, err.kind());
}

#[test]
fn end_in_list() {
    let v = Value::List(vec![Value::End]);
    let err = v.to_bytes(None).unwrap_err();
    assert_eq!(ErrorKind::WrongValueType, err.kind());
}

#[test]
fn end_entries_skipped() {
    let mut map = CompoundMap::new();
    map.insert("gone".to_owned(), Value::End);
    map.insert("kept".to_owned(), Value::Byte(1));

    let expected = Builder::new()
        .start_compound("")
        .byte("kept", 1)
        .end_compound()
        .build();
    assert_eq!(expected, Value::Compound(map).to_bytes(Some("")).unwrap());
}

#[test]
fn bare_end_is_empty() {
    assert!(Value::End.to_bytes(None).unwrap().is_empty());

    let expected = Builder::new().start_compound("root").end_compound().build();
    assert_eq!(expected, Value::End.to_bytes(Some("root")).unwrap());
}

#[test]
fn named_scalar_root() {
    let expected = Builder::new().double("pi", 3.25).build();
    assert_eq!(expected, Value::Double(3.25).to_bytes(Some("pi")).unwrap());
}

#[test]
fn long_string_unsupported() {
    let v = Value::String("x".repeat(70_000));
    let err = v.to_bytes(None).unwrap_err();
    assert_eq!(ErrorKind::Unsupported, err.kind());
}

#[test]
fn long_name_unsupported() {
    let v = compound(vec![("n".repeat(70_000).as_str(), Value::Byte(0))]);
    let err = v.to_bytes(None).unwrap_err();
    assert_eq!(ErrorKind::Unsupported, err.kind());
}

#[test]
fn arrays() {
    let v = compound(vec![
        ("b", ByteArray::new(vec![-1, 0, 1]).into()),
        ("i", IntArray::new(vec![i32::MIN]).into()),
        ("l", LongArray::new(vec![]).into()),
    ]);
    let expected = Builder::new()
        .byte_array("b", &[-1, 0, 1])
        .int_array("i", &[i32::MIN])
        .long_array("l", &[])
        .build();
    assert_eq!(expected, v.to_bytes(None).unwrap());
}

#[test]
fn write_to_writer() {
    let v = compound(vec![("a", Value::Float(0.5))]);
    let mut out = Vec::new();
    v.write_to(&mut out, Some("")).unwrap();
    assert_eq!(v.to_bytes(Some("")).unwrap(), out);

    let mut out = Vec::new();
    let bad = Value::List(vec![Value::Int(1), Value::Long(1)]);
    assert!(bad.write_to(&mut out, None).is_err());
    assert!(out.is_empty());
}

#[test]
fn accessors() {
    assert_eq!(Some(3), Value::Short(3).as_i64());
    assert_eq!(Some(1.5), Value::Float(1.5).as_f64());
    assert_eq!(Some("x"), Value::from("x").as_str());
    assert_eq!(None, Value::Int(1).as_str());
    assert_eq!(None, Value::Int(1).element_tag());
    assert_eq!(Some(Tag::Int), Value::from(vec![1i32, 2]).element_tag());
    assert_eq!(Tag::End, Value::default().tag());
}

#[test]
fn from_conversions() {
    assert_eq!(Value::Byte(1), Value::from(true));
    assert_eq!(Value::Byte(-1), Value::from(u8::MAX));
    assert_eq!(Value::Long(-1), Value::from(u64::MAX));
    assert_eq!(
        Value::List(vec![Value::Int(1), Value::Int(2)]),
        [1i32, 2].into_iter().collect::<Value>()
    );
    assert_eq!(
        Value::IntArray(IntArray::new(vec![0, 0, 0, 7])),
        Value::from(7u128)
    );
}

#[test]
fn to_value_builds_tree() {
    #[derive(serde::Serialize)]
    struct V {
        a: i8,
        b: Option<i8>,
        c: Vec<String>,
    }

    let v = to_value(&V {
        a: 1,
        b: None,
        c: vec!["x".to_owned()],
    })
    .unwrap();

    let expected = compound(vec![
        ("a", Value::Byte(1)),
        ("c", Value::List(vec![Value::from("x")])),
    ]);
    assert_eq!(expected, v);
}

#[test]
fn value_reencodes_to_same_bytes() {
    let v = compound(vec![
        ("empty", CompoundMap::new().into()),
        ("list", Value::List(vec![Value::List(vec![]), Value::List(vec![])])),
        ("arr", LongArray::new(vec![1, 2]).into()),
        ("name", "Bananrama".into()),
    ]);

    // Serializing a Value through the encoder gives back the same tree.
    assert_eq!(v, to_value(&v).unwrap());
    assert_eq!(v.to_bytes(Some("")), crate::encode(&v, Some("")));
}

#[test]
fn nested_single() {
    let v = to_value(&Single {
        val: Single { val: 1u16 },
    })
    .unwrap();
    assert_eq!(Some(1), v.as_compound().unwrap()["val"].as_compound().unwrap()["val"].as_i64());
}
