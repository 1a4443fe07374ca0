//! # Registry Values
//!
//! Typed leaf data and its on-disk text form.
//!
//! Every value is stored as one file named `<name>.<type>.rv` whose content is
//! the text produced by [`codec::serialize`]. The type set is closed, see
//! [`ValueType`].
pub mod codec;
pub mod error;
pub mod types;

pub use codec::{deserialize, encode, infer, infer_type, serialize};
pub use error::ValueError;
pub use types::{Value, ValueType};
