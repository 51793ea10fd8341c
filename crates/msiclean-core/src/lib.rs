mod labels;
mod packed_code;
mod targets;

pub use labels::LabelRule;
pub use packed_code::{verify_packed_code_encoding, PackedCode};
pub use targets::{
    CleanupTargets, CLASSES_INSTALLER_ROOT_PATH, COMPONENTS_KEY, DISPLAY_NAME_VALUE,
    INSTALLER_ROOT_PATH, INSTALL_PROPERTIES_KEY, LEGACY_SERVICE_COMPONENT_CODE,
    MASTER_UPGRADE_CODE, PRODUCTS_KEY, PRODUCT_NAME_VALUE, UPGRADE_CODES_KEY, USER_DATA_KEY,
};

#[cfg(test)]
mod tests;
