use std::path::PathBuf;

use crate::kernel::error::Result;
#[cfg(unix)]
use crate::ownership::error::OwnershipError;

/// The parts of a user database entry the registry needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
    pub home: PathBuf,
}

/// Look up `name` in the system user database.
///
/// `Ok(None)` means the user does not exist. Platforms without a user
/// database always report `None`.
#[cfg(unix)]
pub fn lookup_user(name: &str) -> Result<Option<UserRecord>> {
    use nix::unistd::User;

    let user = User::from_name(name).map_err(|e| OwnershipError::Lookup {
        user: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(user.map(|u| UserRecord {
        name: u.name,
        uid: u.uid.as_raw(),
        gid: u.gid.as_raw(),
        home: u.dir,
    }))
}

#[cfg(not(unix))]
pub fn lookup_user(_name: &str) -> Result<Option<UserRecord>> {
    Ok(None)
}
