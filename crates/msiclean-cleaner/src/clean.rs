use anyhow::{anyhow, Context, Result};
use msiclean_registry::{join_key_path, KeyAccess, RegistryKey};

use crate::{CleanupEvent, KeyMatcher};

/// Removes every immediate subkey of `key` the matcher accepts and returns
/// their names in enumeration order.
///
/// The subkey names are captured before anything is removed. Each candidate
/// is opened read-only for evaluation and closed again before its subtree is
/// deleted through `key`, which therefore has to be writable. Each removal is
/// reported as a [`CleanupEvent::Removed`] at `depth`. Subkeys that do not
/// match are left alone and not descended into.
pub fn clean_subkeys_if<K, Emit>(
    depth: usize,
    key: &K,
    matcher: &KeyMatcher,
    emit: &mut Emit,
) -> Result<Vec<String>>
where
    K: RegistryKey,
    Emit: FnMut(&CleanupEvent),
{
    let names = key.subkey_names()?;
    let mut removed = Vec::new();

    for name in names {
        let should_remove = {
            let subkey = key.open_subkey(&name, KeyAccess::Read)?.ok_or_else(|| {
                anyhow!(
                    "registry key disappeared during cleanup: {}",
                    join_key_path(key.path(), &name)
                )
            })?;
            matcher.matches(&subkey, &name).with_context(|| {
                format!(
                    "failed to inspect registry key: {}",
                    join_key_path(key.path(), &name)
                )
            })?
        };
        if !should_remove {
            continue;
        }

        key.delete_subkey_tree(&name)?;
        emit(&CleanupEvent::Removed {
            depth,
            name: name.clone(),
        });
        removed.push(name);
    }

    Ok(removed)
}
