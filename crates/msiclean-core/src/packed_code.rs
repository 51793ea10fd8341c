use std::fmt;

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::targets::{LEGACY_SERVICE_COMPONENT_CODE, MASTER_UPGRADE_CODE};

const MASTER_UPGRADE_CODE_PACKED: &str = "F499BC52FCDCB12419656725A8FA0C1E";
const LEGACY_SERVICE_COMPONENT_CODE_PACKED: &str = "32FAF4D19A4677B4AAECA19B32580DC9";

/// Compact key name the installer database uses for a product, component or
/// upgrade code: the mixed-endian GUID bytes, each written low nibble first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedCode(String);

impl PackedCode {
    pub fn from_uuid(code: Uuid) -> Self {
        let swapped = code
            .to_bytes_le()
            .iter()
            .map(|byte| byte.rotate_left(4))
            .collect::<Vec<_>>();
        Self(hex::encode_upper(swapped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackedCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackedCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackedCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Encodes the two well-known codes and compares them with their known packed
/// forms. Any drift in the encoder or the constants aborts the run.
pub fn verify_packed_code_encoding() -> Result<()> {
    verify_packed_code(MASTER_UPGRADE_CODE, MASTER_UPGRADE_CODE_PACKED)?;
    verify_packed_code(
        LEGACY_SERVICE_COMPONENT_CODE,
        LEGACY_SERVICE_COMPONENT_CODE_PACKED,
    )
}

pub(crate) fn verify_packed_code(code: Uuid, expected: &str) -> Result<()> {
    if PackedCode::from_uuid(code) != expected {
        return Err(anyhow!("Failed."));
    }
    Ok(())
}
