use std::fmt::Debug;
use std::path::Path;

use crate::kernel::error::Result;
use crate::ownership::user::{UserRecord, lookup_user};

/// Assigns ownership of registry paths to a user.
///
/// Implementations are called best-effort: the registry logs their errors and
/// carries on.
pub trait OwnershipSetter: Send + Sync + Debug {
    /// Resolve `name` to a user record, `Ok(None)` if unknown
    fn resolve_user(&self, name: &str) -> Result<Option<UserRecord>> {
        lookup_user(name)
    }

    /// Make `user` the owner (uid and primary gid) of `path`
    fn set_owner(&self, path: &Path, user: &UserRecord) -> Result<()>;
}

/// Changes ownership through the operating system (`chown` on Unix).
///
/// Off Unix this does nothing.
#[derive(Debug, Clone, Default)]
pub struct SystemOwnership;

impl OwnershipSetter for SystemOwnership {
    #[cfg(unix)]
    fn set_owner(&self, path: &Path, user: &UserRecord) -> Result<()> {
        use crate::ownership::error::OwnershipError;
        use nix::unistd::{Gid, Uid, chown};

        chown(path, Some(Uid::from_raw(user.uid)), Some(Gid::from_raw(user.gid))).map_err(|e| {
            OwnershipError::Chown {
                path: path.to_path_buf(),
                uid: user.uid,
                gid: user.gid,
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[cfg(not(unix))]
    fn set_owner(&self, _path: &Path, _user: &UserRecord) -> Result<()> {
        Ok(())
    }
}

/// Leaves ownership alone
#[derive(Debug, Clone, Default)]
pub struct NoopOwnership;

impl OwnershipSetter for NoopOwnership {
    fn resolve_user(&self, _name: &str) -> Result<Option<UserRecord>> {
        Ok(None)
    }

    fn set_owner(&self, _path: &Path, _user: &UserRecord) -> Result<()> {
        Ok(())
    }
}
