#![cfg(test)]

use crate::kernel::error::Result;
use crate::registry::{Entry, ListingKind};
use crate::tests::integration::common::Fixture;
use crate::value::Value;

#[test]
fn test_dot_dot_write_stays_inside_hive() -> Result<()> {
    let fx = Fixture::new();
    let file = fx
        .registry
        .write("alice", "HKLM/../HKEY_VOLATILE_MEMORY/Injected", &Value::from("x"))?;

    assert_eq!(file, fx.hklm().join("%2E%2E/HKEY_VOLATILE_MEMORY/Injected.str.rv"));
    assert!(file.starts_with(fx.hklm()));
    assert_eq!(fx.registry.get("HKVM/Injected")?, None);
    assert!(!fx.hkvm().exists());

    // The literal name reads back from where it was written
    assert_eq!(
        fx.registry.get("HKLM/../HKEY_VOLATILE_MEMORY/Injected")?,
        Some(Entry::Value(Value::Str("x".into())))
    );
    let listing = fx.registry.get("HKLM")?.expect("listing");
    assert_eq!(listing.as_listing().expect("key")[".."], ListingKind::Key);
    Ok(())
}

#[test]
fn test_dot_dot_read_does_not_reach_sibling_hive() -> Result<()> {
    let fx = Fixture::new();
    fx.registry.write("alice", "HKVM/Keep/Y", &Value::from(1))?;

    assert_eq!(fx.registry.get("HKLM/../HKEY_VOLATILE_MEMORY/Keep/Y")?, None);
    assert_eq!(fx.registry.get("HKLM/./Keep/Y")?, None);
    Ok(())
}

#[test]
fn test_dot_dot_delete_leaves_other_hives_alone() -> Result<()> {
    let fx = Fixture::new();
    fx.registry.write("alice", "HKVM/Keep/Y", &Value::from(1))?;
    fx.registry.write("alice", "HKLM/Keep/Z", &Value::from(2))?;

    assert!(!fx.registry.delete("HKLM/..")?);
    assert!(!fx.registry.delete("HKLM/../HKEY_VOLATILE_MEMORY/Keep")?);
    assert!(!fx.registry.delete("HKLM/.")?);

    assert_eq!(fx.registry.get("HKVM/Keep/Y")?, Some(Entry::Value(Value::Dword(1))));
    assert_eq!(fx.registry.get("HKLM/Keep/Z")?, Some(Entry::Value(Value::Dword(2))));
    Ok(())
}
