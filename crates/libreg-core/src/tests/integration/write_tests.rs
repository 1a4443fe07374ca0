#![cfg(test)]

use std::fs;

use serde_json::json;

use crate::hive::{HiveError, HiveTable};
use crate::kernel::error::{Error, Result};
use crate::registry::{Entry, Registry};
use crate::storage::StorageSystemError;
use crate::tests::integration::common::{Fixture, table_in};
use crate::value::{Value, ValueError, ValueType};

#[test]
fn test_write_lands_in_user_hive_by_default() -> Result<()> {
    let fx = Fixture::new();
    let file = fx.registry.write("alice", "SOFTWARE/App/Theme", &Value::from("dark"))?;

    assert_eq!(file, fx.hkcu().join("SOFTWARE/App/Theme.str.rv"));
    assert_eq!(fs::read_to_string(&file).expect("value file"), "dark");
    assert!(!fx.hklm().exists());
    Ok(())
}

#[test]
fn test_write_encodes_segments_on_disk() -> Result<()> {
    let fx = Fixture::new();
    let file = fx.registry.write("alice", "HKLM/Desktop/배경 화면", &Value::from("blue.png"))?;

    assert_eq!(
        file,
        fx.hklm().join("Desktop/%EB%B0%B0%EA%B2%BD%20%ED%99%94%EB%A9%B4.str.rv")
    );
    assert_eq!(
        fx.registry.get("HKLM/Desktop/배경 화면")?,
        Some(Entry::Value(Value::Str("blue.png".into())))
    );
    Ok(())
}

#[test]
fn test_write_as_infers_types() -> Result<()> {
    let fx = Fixture::new();
    let cases = [
        ("Flag", json!(true), ValueType::Bool, "1"),
        ("Small", json!(42), ValueType::Dword, "42"),
        ("Big", json!(5_000_000_000i64), ValueType::Qword, "5000000000"),
        ("Ratio", json!(0.5), ValueType::Float, "0.5"),
        ("Huge", json!(1e300), ValueType::Double, "1e300"),
        ("Name", json!("aqua"), ValueType::Str, "aqua"),
        ("Items", json!(["a", "b,c", 3]), ValueType::List, "a, b\\,c, 3"),
    ];

    for (name, input, ty, text) in cases {
        let path = format!("HKLM/Types/{name}");
        let file = fx.registry.write_as("alice", &path, &input, None)?;
        assert!(file.to_string_lossy().ends_with(&format!("{name}.{ty}.rv")), "{name}");
        assert_eq!(fs::read_to_string(&file).expect("value file"), text, "{name}");
    }

    assert_eq!(
        fx.registry.get("HKLM/Types/Items")?,
        Some(Entry::Value(Value::List(vec!["a".into(), "b,c".into(), "3".into()])))
    );
    Ok(())
}

#[test]
fn test_write_as_explicit_type_is_verbatim() -> Result<()> {
    let fx = Fixture::new();
    let file = fx.registry.write_as("alice", "HKLM/T/Wide", &json!(5_000_000_000i64), Some(ValueType::Dword))?;
    assert_eq!(fs::read_to_string(&file).expect("value file"), "5000000000");

    let file = fx.registry.write_as("alice", "HKLM/T/Mask", &json!("0xFF00"), Some(ValueType::Hex))?;
    assert_eq!(fs::read_to_string(&file).expect("value file"), "ff00");
    assert_eq!(fx.registry.get("HKLM/T/Mask")?, Some(Entry::Value(Value::Hex(0xff00))));
    Ok(())
}

#[test]
fn test_unsupported_input_fails_before_io() {
    let fx = Fixture::new();
    for input in [json!(null), json!({"a": 1}), json!([[1]])] {
        let err = fx.registry.write_as("alice", "HKLM/Bad/Value", &input, None).unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::UnsupportedType(_))));
    }
    let err = fx.registry.write_as("alice", "HKLM/Bad/Value", &json!("xyz"), Some(ValueType::Hex)).unwrap_err();
    assert!(matches!(err, Error::Value(ValueError::InvalidHex(_))));

    assert!(!fx.hklm().exists(), "no directories are created for rejected values");
}

#[test]
fn test_hex_wider_than_64_bits_is_rejected() -> Result<()> {
    let fx = Fixture::new();
    let err = fx
        .registry
        .write_as("alice", "HKLM/App/Key", &json!("0x00112233445566778899"), Some(ValueType::Hex))
        .unwrap_err();
    assert!(matches!(err, Error::Value(ValueError::InvalidHex(_))));
    assert_eq!(fx.registry.get("HKLM/App/Key")?, None);

    fx.registry.write_as("alice", "HKLM/App/Key", &json!("0xffffffffffffffff"), Some(ValueType::Hex))?;
    assert_eq!(fx.registry.get("HKLM/App/Key")?, Some(Entry::Value(Value::Hex(u64::MAX))));
    Ok(())
}

#[test]
fn test_write_without_user_hive_is_hive_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut table = table_in(dir.path());
    table.user_hive = "HKEY_NOWHERE".to_string();
    let registry = Registry::new(table);

    let err = registry.write("alice", "SOFTWARE/App/X", &Value::from(1)).unwrap_err();
    assert!(err.is_hive_not_found());
    let err = registry.delete("SOFTWARE/App/X").unwrap_err();
    assert!(matches!(err, Error::Hive(HiveError::NotFound { .. })));
    let err = registry.create_key("alice", "SOFTWARE/App").unwrap_err();
    assert!(err.is_hive_not_found());

    // Explicit hives keep working
    assert!(registry.write("alice", "HKLM/SOFTWARE/App/X", &Value::from(1)).is_ok());
}

#[test]
fn test_write_to_hive_root_is_rejected() {
    let fx = Fixture::new();
    let err = fx.registry.write("alice", "HKLM", &Value::from(1)).unwrap_err();
    assert!(matches!(err, Error::StorageSystem(StorageSystemError::InvalidPath { .. })));
    let err = fx.registry.write("alice", "/", &Value::from(1)).unwrap_err();
    assert!(matches!(err, Error::StorageSystem(StorageSystemError::InvalidPath { .. })));
}

#[test]
fn test_overwrite_same_type_replaces_value() -> Result<()> {
    let fx = Fixture::new();
    fx.registry.write("alice", "HKLM/App/Count", &Value::from(1))?;
    fx.registry.write("alice", "HKLM/App/Count", &Value::from(2))?;

    let names: Vec<_> = fs::read_dir(fx.hklm().join("App"))
        .expect("read key")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(names.len(), 1);
    assert_eq!(fx.registry.get("HKLM/App/Count")?, Some(Entry::Value(Value::Dword(2))));
    Ok(())
}

#[test]
fn test_default_table_registry_uses_default_hives() {
    let registry = Registry::default();
    assert_eq!(registry.table(), &HiveTable::default());
}

#[test]
fn test_registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
}
