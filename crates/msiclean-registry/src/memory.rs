use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::{join_key_path, KeyAccess, RegistryHive, RegistryKey, RegistryValue};

type NodeRef = Rc<RefCell<MemoryNode>>;

#[derive(Debug, Default)]
struct MemoryNode {
    subkeys: BTreeMap<String, NodeRef>,
    values: BTreeMap<String, RegistryValue>,
}

impl MemoryNode {
    fn subkey_entry(&self, name: &str) -> Option<(String, NodeRef)> {
        self.subkeys
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(existing, node)| (existing.clone(), Rc::clone(node)))
    }

    fn value_name(&self, name: &str) -> Option<String> {
        self.values
            .keys()
            .find(|existing| existing.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn to_tree(&self) -> MemoryTree {
        MemoryTree {
            values: self.values.clone(),
            subkeys: self
                .subkeys
                .iter()
                .map(|(name, node)| (name.clone(), node.borrow().to_tree()))
                .collect(),
        }
    }
}

/// Detached copy of a key and everything below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    pub values: BTreeMap<String, RegistryValue>,
    pub subkeys: BTreeMap<String, MemoryTree>,
}

/// Registry hive held in memory. Names compare case-insensitively the way the
/// Windows registry does. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    root: NodeRef,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `path` and any missing parents.
    pub fn create_key(&self, path: &str) {
        self.ensure_node(path);
    }

    pub fn set_value(&self, path: &str, name: &str, value: impl Into<RegistryValue>) {
        let node = self.ensure_node(path);
        let mut node = node.borrow_mut();
        if let Some(existing) = node.value_name(name) {
            node.values.remove(&existing);
        }
        node.values.insert(name.to_string(), value.into());
    }

    pub fn key_exists(&self, path: &str) -> bool {
        self.find_node(path).is_some()
    }

    pub fn list_subkeys(&self, path: &str) -> Vec<String> {
        self.find_node(path)
            .map(|(node, _)| node.borrow().subkeys.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn tree(&self, path: &str) -> Option<MemoryTree> {
        self.find_node(path).map(|(node, _)| node.borrow().to_tree())
    }

    fn ensure_node(&self, path: &str) -> NodeRef {
        let mut current = Rc::clone(&self.root);
        for segment in path_segments(path) {
            let next = {
                let mut node = current.borrow_mut();
                match node.subkey_entry(segment) {
                    Some((_, child)) => child,
                    None => {
                        let child = NodeRef::default();
                        node.subkeys.insert(segment.to_string(), Rc::clone(&child));
                        child
                    }
                }
            };
            current = next;
        }
        current
    }

    fn find_node(&self, path: &str) -> Option<(NodeRef, String)> {
        let mut current = Rc::clone(&self.root);
        let mut resolved = String::new();
        for segment in path_segments(path) {
            let (name, child) = current.borrow().subkey_entry(segment)?;
            resolved = join_key_path(&resolved, &name);
            current = child;
        }
        Some((current, resolved))
    }
}

impl RegistryHive for MemoryRegistry {
    type Key = MemoryKey;

    fn open_root(&self, path: &str, access: KeyAccess) -> Result<Option<MemoryKey>> {
        Ok(self
            .find_node(path)
            .map(|(node, path)| MemoryKey { node, path, access }))
    }
}

#[derive(Debug)]
pub struct MemoryKey {
    node: NodeRef,
    path: String,
    access: KeyAccess,
}

impl MemoryKey {
    pub fn access(&self) -> KeyAccess {
        self.access
    }
}

impl RegistryKey for MemoryKey {
    fn path(&self) -> &str {
        &self.path
    }

    fn subkey_names(&self) -> Result<Vec<String>> {
        Ok(self.node.borrow().subkeys.keys().cloned().collect())
    }

    fn open_subkey(&self, name: &str, access: KeyAccess) -> Result<Option<MemoryKey>> {
        let entry = self.node.borrow().subkey_entry(name);
        Ok(entry.map(|(existing, node)| MemoryKey {
            node,
            path: join_key_path(&self.path, &existing),
            access,
        }))
    }

    fn value_names(&self) -> Result<Vec<String>> {
        Ok(self.node.borrow().values.keys().cloned().collect())
    }

    fn value(&self, name: &str) -> Result<Option<RegistryValue>> {
        let node = self.node.borrow();
        Ok(node
            .value_name(name)
            .and_then(|existing| node.values.get(&existing).cloned()))
    }

    fn delete_subkey_tree(&self, name: &str) -> Result<()> {
        if self.access == KeyAccess::Read {
            return Err(anyhow!(
                "access denied: key was opened read-only: {}",
                self.path
            ));
        }

        let mut node = self.node.borrow_mut();
        let Some((existing, _)) = node.subkey_entry(name) else {
            return Err(anyhow!(
                "registry key not found: {}",
                join_key_path(&self.path, name)
            ));
        };
        node.subkeys.remove(&existing);
        Ok(())
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('\\').filter(|segment| !segment.is_empty())
}
