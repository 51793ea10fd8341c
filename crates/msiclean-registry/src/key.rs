use anyhow::Result;

use crate::RegistryValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAccess {
    Read,
    ReadWrite,
}

/// An open registry key. The handle is released when the value is dropped.
///
/// Opening a missing subkey and reading a missing value are reported as
/// `Ok(None)`; only real access failures are errors.
pub trait RegistryKey: Sized {
    /// Path of this key below the hive, used in messages.
    fn path(&self) -> &str;

    /// Names of the immediate subkeys, captured at call time.
    fn subkey_names(&self) -> Result<Vec<String>>;

    fn open_subkey(&self, name: &str, access: KeyAccess) -> Result<Option<Self>>;

    fn value_names(&self) -> Result<Vec<String>>;

    fn value(&self, name: &str) -> Result<Option<RegistryValue>>;

    /// Removes `name` and everything below it.
    fn delete_subkey_tree(&self, name: &str) -> Result<()>;

    fn string_value(&self, name: &str) -> Result<Option<String>> {
        Ok(self.value(name)?.and_then(RegistryValue::into_string))
    }
}

pub trait RegistryHive {
    type Key: RegistryKey;

    fn open_root(&self, path: &str, access: KeyAccess) -> Result<Option<Self::Key>>;
}

pub fn join_key_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}\\{name}")
    }
}
