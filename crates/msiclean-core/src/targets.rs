use uuid::{uuid, Uuid};

use crate::{LabelRule, PackedCode};

pub const INSTALLER_ROOT_PATH: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Installer";
pub const CLASSES_INSTALLER_ROOT_PATH: &str = r"SOFTWARE\Classes\Installer";

pub const USER_DATA_KEY: &str = "UserData";
pub const UPGRADE_CODES_KEY: &str = "UpgradeCodes";
pub const COMPONENTS_KEY: &str = "Components";
pub const PRODUCTS_KEY: &str = "Products";
pub const INSTALL_PROPERTIES_KEY: &str = "InstallProperties";

pub const DISPLAY_NAME_VALUE: &str = "DisplayName";
pub const PRODUCT_NAME_VALUE: &str = "ProductName";

pub const MASTER_UPGRADE_CODE: Uuid = uuid!("25CB994F-CDCF-421B-9156-76528AAFC0E1");
pub const LEGACY_SERVICE_COMPONENT_CODE: Uuid = uuid!("1D4FAF23-64A9-4B77-AACE-1AB92385D09C");

const ETW_HOST_MARKER: &str = "ETW Host";
const ETW_HOST_SERVICE_LABEL_PREFIX: &str = "JetBrains ETW Host Service";
const ETW_SERVICE_LABEL: &str = "JetBrains ETW Service";

/// What a cleanup run looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTargets {
    pub upgrade_code: Uuid,
    pub legacy_component_code: Uuid,
    pub component_marker: String,
    pub product_labels: LabelRule,
}

impl CleanupTargets {
    pub fn jetbrains_etw_host() -> Self {
        Self {
            upgrade_code: MASTER_UPGRADE_CODE,
            legacy_component_code: LEGACY_SERVICE_COMPONENT_CODE,
            component_marker: ETW_HOST_MARKER.to_string(),
            product_labels: LabelRule::new([ETW_HOST_SERVICE_LABEL_PREFIX], [ETW_SERVICE_LABEL]),
        }
    }

    pub fn packed_upgrade_code(&self) -> PackedCode {
        PackedCode::from_uuid(self.upgrade_code)
    }

    pub fn packed_legacy_component_code(&self) -> PackedCode {
        PackedCode::from_uuid(self.legacy_component_code)
    }
}

impl Default for CleanupTargets {
    fn default() -> Self {
        Self::jetbrains_etw_host()
    }
}
