/// Suffix shared by every value file: `<name>.<type>.rv`
pub const VALUE_FILE_SUFFIX: &str = "rv";

/// Tag reported for subdirectories in key listings
pub const KEY_TAG: &str = "key";

/// Per-user registry location relative to the user's home directory
pub const USER_REGISTRY_DIR: &str = ".local/aqua/registry";

/// Canonical name of the machine-wide hive
pub const HKEY_LOCAL_MACHINE: &str = "HKEY_LOCAL_MACHINE";

/// Canonical name of the per-user hive
pub const HKEY_CURRENT_USER: &str = "HKEY_CURRENT_USER";

/// Canonical name of the volatile hive
pub const HKEY_VOLATILE_MEMORY: &str = "HKEY_VOLATILE_MEMORY";

/// Canonical name of the machine-wide pre-install overlay hive
pub const HKEY_LOCAL_MACHINE_NOINST: &str = "HKEY_LOCAL_MACHINE_NOINST";

/// Key under which write hooks are registered, one value per watched path
pub const HOOKS_KEY: &str =
    "HKEY_LOCAL_MACHINE/SYSTEM/Services/me.hysong.aqua/RegistryPropagator/ActionHooks";

/// Token replaced by the serialized value in hook arguments
pub const HOOK_PLACEHOLDER: &str = "{}";

/// Prefix of in-flight temp files; never ends in `.rv` so listings skip them
pub const TEMP_FILE_PREFIX: &str = ".libreg-";
