use std::io;

use anyhow::{Context, Result};
use winreg::enums::{RegType, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE};
use winreg::types::FromRegValue;
use winreg::{RegKey, RegValue};

use crate::{join_key_path, KeyAccess, RegistryHive, RegistryKey, RegistryValue};

/// The live `HKEY_LOCAL_MACHINE` hive.
pub struct WindowsRegistry {
    hive: RegKey,
}

impl WindowsRegistry {
    pub fn local_machine() -> Self {
        Self {
            hive: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl RegistryHive for WindowsRegistry {
    type Key = WindowsKey;

    fn open_root(&self, path: &str, access: KeyAccess) -> Result<Option<WindowsKey>> {
        let display_path = format!("HKLM\\{path}");
        match self.hive.open_subkey_with_flags(path, access_flags(access)) {
            Ok(key) => Ok(Some(WindowsKey {
                key,
                path: path.to_string(),
            })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to open registry key: {display_path}"))
            }
        }
    }
}

pub struct WindowsKey {
    key: RegKey,
    path: String,
}

impl RegistryKey for WindowsKey {
    fn path(&self) -> &str {
        &self.path
    }

    fn subkey_names(&self) -> Result<Vec<String>> {
        self.key
            .enum_keys()
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("failed to enumerate subkeys of HKLM\\{}", self.path))
    }

    fn open_subkey(&self, name: &str, access: KeyAccess) -> Result<Option<WindowsKey>> {
        let path = join_key_path(&self.path, name);
        match self.key.open_subkey_with_flags(name, access_flags(access)) {
            Ok(key) => Ok(Some(WindowsKey { key, path })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to open registry key: HKLM\\{path}")),
        }
    }

    fn value_names(&self) -> Result<Vec<String>> {
        self.key
            .enum_values()
            .map(|entry| entry.map(|(name, _)| name))
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("failed to enumerate values of HKLM\\{}", self.path))
    }

    fn value(&self, name: &str) -> Result<Option<RegistryValue>> {
        let raw = match self.key.get_raw_value(name) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read registry value '{name}' of HKLM\\{}", self.path)
                });
            }
        };
        convert_value(&raw)
            .map(Some)
            .with_context(|| format!("failed to decode registry value '{name}' of HKLM\\{}", self.path))
    }

    fn delete_subkey_tree(&self, name: &str) -> Result<()> {
        self.key.delete_subkey_all(name).with_context(|| {
            format!(
                "failed to delete registry key: HKLM\\{}",
                join_key_path(&self.path, name)
            )
        })
    }
}

fn access_flags(access: KeyAccess) -> u32 {
    match access {
        KeyAccess::Read => KEY_READ,
        KeyAccess::ReadWrite => KEY_READ | KEY_WRITE,
    }
}

fn convert_value(raw: &RegValue) -> io::Result<RegistryValue> {
    Ok(match raw.vtype {
        RegType::REG_SZ => RegistryValue::String(String::from_reg_value(raw)?),
        RegType::REG_EXPAND_SZ => RegistryValue::ExpandString(String::from_reg_value(raw)?),
        RegType::REG_MULTI_SZ => RegistryValue::MultiString(Vec::<String>::from_reg_value(raw)?),
        RegType::REG_DWORD => RegistryValue::Dword(u32::from_reg_value(raw)?),
        RegType::REG_QWORD => RegistryValue::Qword(u64::from_reg_value(raw)?),
        _ => RegistryValue::Binary(raw.bytes.to_vec()),
    })
}
