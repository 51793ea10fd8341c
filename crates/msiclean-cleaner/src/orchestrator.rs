use anyhow::Result;
use msiclean_core::{
    CleanupTargets, CLASSES_INSTALLER_ROOT_PATH, INSTALLER_ROOT_PATH, USER_DATA_KEY,
};
use msiclean_registry::{KeyAccess, RegistryHive, RegistryKey};

use crate::passes::{
    clean_class_products, clean_components, clean_products, clean_upgrade_codes,
    open_required_root, open_required_subkey, CleanupPlan,
};
use crate::{CleanupEvent, CleanupSummary};

/// Runs every cleanup pass against `hive` in order:
///
/// 1. `UpgradeCodes` below the installer root,
/// 2. `Components` and `Products` for each user SID under `UserData`,
/// 3. `UpgradeCodes` and `Products` below the classes installer root.
///
/// Both installer roots, `UserData` and every listed SID key are required;
/// their absence aborts the run. Removals made before an error stay removed.
pub fn run_cleanup<H, Emit>(
    hive: &H,
    targets: &CleanupTargets,
    emit: &mut Emit,
) -> Result<CleanupSummary>
where
    H: RegistryHive,
    Emit: FnMut(&CleanupEvent),
{
    let plan = CleanupPlan::from_targets(targets);
    let mut summary = CleanupSummary::default();

    emit(&CleanupEvent::Section {
        depth: 0,
        title: INSTALLER_ROOT_PATH.to_string(),
    });
    {
        let installer = open_required_root(hive, INSTALLER_ROOT_PATH, KeyAccess::Read)?;
        summary.record(clean_upgrade_codes(1, &installer, &plan, emit)?);

        let user_data = open_required_subkey(&installer, USER_DATA_KEY, KeyAccess::Read)?;
        for user_sid in user_data.subkey_names()? {
            emit(&CleanupEvent::Section {
                depth: 1,
                title: user_sid.clone(),
            });
            let user_key = open_required_subkey(&user_data, &user_sid, KeyAccess::Read)?;
            summary.record(clean_components(2, &user_key, &plan, emit)?);
            summary.record(clean_products(2, &user_key, &plan, emit)?);
        }
    }

    emit(&CleanupEvent::Section {
        depth: 0,
        title: CLASSES_INSTALLER_ROOT_PATH.to_string(),
    });
    let classes = open_required_root(hive, CLASSES_INSTALLER_ROOT_PATH, KeyAccess::Read)?;
    summary.record(clean_upgrade_codes(1, &classes, &plan, emit)?);
    summary.record(clean_class_products(1, &classes, &plan, emit)?);

    Ok(summary)
}
