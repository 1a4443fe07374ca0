//! # Ownership
//!
//! Values written into the per-user hive belong to the user they were written
//! for, including every directory created on the way. Ownership changes need
//! privileges the caller may not have, so every step here is best-effort.
pub mod error;
pub mod setter;
pub mod user;

pub use error::OwnershipError;
pub use setter::{NoopOwnership, OwnershipSetter, SystemOwnership};
pub use user::{UserRecord, lookup_user};

use std::path::Path;

use log::debug;

/// Assign `user` to `base` and every directory below it down to and
/// including `target_dir`.
///
/// `target_dir` must lie under `base`; otherwise nothing happens. Failures are
/// logged and skipped. Returns the number of directories reassigned.
pub fn assign_path(
    setter: &dyn OwnershipSetter,
    base: &Path,
    target_dir: &Path,
    user: &UserRecord,
) -> usize {
    let Ok(relative) = target_dir.strip_prefix(base) else {
        debug!(
            "Skipping ownership walk: {} is not under {}",
            target_dir.display(),
            base.display()
        );
        return 0;
    };

    let mut cumulative = base.to_path_buf();
    let mut assigned = usize::from(assign_one(setter, &cumulative, user));
    for component in relative.components() {
        cumulative.push(component);
        assigned += usize::from(assign_one(setter, &cumulative, user));
    }
    assigned
}

/// Assign `user` to a single path, logging failure. Returns whether it worked.
pub fn assign_one(setter: &dyn OwnershipSetter, path: &Path, user: &UserRecord) -> bool {
    match setter.set_owner(path, user) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not assign {} to {}: {}", path.display(), user.name, e);
            false
        }
    }
}
