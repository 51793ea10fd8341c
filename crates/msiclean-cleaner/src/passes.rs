use anyhow::{anyhow, Result};
use msiclean_core::{CleanupTargets, COMPONENTS_KEY, PRODUCTS_KEY, UPGRADE_CODES_KEY};
use msiclean_registry::{join_key_path, KeyAccess, RegistryHive, RegistryKey};

use crate::{clean_subkeys_if, CleanupEvent, KeyMatcher};

/// Matchers for each pass, built once per run.
#[derive(Debug, Clone)]
pub(crate) struct CleanupPlan {
    pub(crate) upgrade_codes: KeyMatcher,
    pub(crate) components: KeyMatcher,
    pub(crate) products: KeyMatcher,
    pub(crate) class_products: KeyMatcher,
}

impl CleanupPlan {
    pub(crate) fn from_targets(targets: &CleanupTargets) -> Self {
        Self {
            upgrade_codes: KeyMatcher::ExactName(targets.packed_upgrade_code().to_string()),
            components: KeyMatcher::AnyOf(vec![
                KeyMatcher::ExactName(targets.packed_legacy_component_code().to_string()),
                KeyMatcher::ValueContains(targets.component_marker.clone()),
            ]),
            products: KeyMatcher::display_name(targets.product_labels.clone()),
            class_products: KeyMatcher::product_name(targets.product_labels.clone()),
        }
    }
}

pub(crate) fn clean_upgrade_codes<K, Emit>(
    depth: usize,
    parent: &K,
    plan: &CleanupPlan,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    clean_optional_subkey(
        depth,
        parent,
        UPGRADE_CODES_KEY,
        "UpgradeCodes",
        &plan.upgrade_codes,
        emit,
    )
}

pub(crate) fn clean_components<K, Emit>(
    depth: usize,
    parent: &K,
    plan: &CleanupPlan,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    clean_optional_subkey(
        depth,
        parent,
        COMPONENTS_KEY,
        "Components",
        &plan.components,
        emit,
    )
}

pub(crate) fn clean_products<K, Emit>(
    depth: usize,
    parent: &K,
    plan: &CleanupPlan,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    clean_optional_subkey(
        depth,
        parent,
        PRODUCTS_KEY,
        "Products",
        &plan.products,
        emit,
    )
}

pub(crate) fn clean_class_products<K, Emit>(
    depth: usize,
    parent: &K,
    plan: &CleanupPlan,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    clean_optional_subkey(
        depth,
        parent,
        PRODUCTS_KEY,
        "ClassProducts",
        &plan.class_products,
        emit,
    )
}

/// Runs one pass over `parent\child_name`. A missing child is zero work and
/// prints nothing; a present one always gets its section header.
fn clean_optional_subkey<K, Emit>(
    depth: usize,
    parent: &K,
    child_name: &str,
    title: &str,
    matcher: &KeyMatcher,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    let Some(child) = parent.open_subkey(child_name, KeyAccess::ReadWrite)? else {
        return Ok(Vec::new());
    };

    emit(&CleanupEvent::Section {
        depth,
        title: title.to_string(),
    });
    let removed = clean_subkeys_if(depth + 1, &child, matcher, emit)?;
    Ok(removed
        .iter()
        .map(|name| join_key_path(child.path(), name))
        .collect())
}

pub(crate) fn open_required_root<H: RegistryHive>(
    hive: &H,
    path: &str,
    access: KeyAccess,
) -> Result<H::Key> {
    hive.open_root(path, access)?
        .ok_or_else(|| anyhow!("required registry key is missing: HKLM\\{path}"))
}

pub(crate) fn open_required_subkey<K: RegistryKey>(
    parent: &K,
    name: &str,
    access: KeyAccess,
) -> Result<K> {
    parent.open_subkey(name, access)?.ok_or_else(|| {
        anyhow!(
            "required registry key is missing: HKLM\\{}",
            join_key_path(parent.path(), name)
        )
    })
}
