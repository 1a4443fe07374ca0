use std::collections::BTreeMap;
use std::fmt;

use crate::kernel::constants::KEY_TAG;
use crate::value::{Value, ValueType};

/// What a name inside a key refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Value(ValueType),
    Key,
}

impl ListingKind {
    /// Type tag of a value, or `key` for a subkey
    pub fn tag(&self) -> &'static str {
        match self {
            ListingKind::Value(ty) => ty.tag(),
            ListingKind::Key => KEY_TAG,
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Contents of a key: decoded child name to what it is
pub type Listing = BTreeMap<String, ListingKind>;

/// Result of reading a registry path: a single value or the listing of a key
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Value(Value),
    Key(Listing),
}

impl Entry {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Key(_) => None,
        }
    }

    pub fn as_listing(&self) -> Option<&Listing> {
        match self {
            Entry::Key(listing) => Some(listing),
            Entry::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Key(_) => None,
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Value(value)
    }
}

impl From<Listing> for Entry {
    fn from(listing: Listing) -> Self {
        Entry::Key(listing)
    }
}
