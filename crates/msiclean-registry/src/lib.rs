mod key;
mod memory;
mod value;
#[cfg(windows)]
mod windows;

pub use key::{join_key_path, KeyAccess, RegistryHive, RegistryKey};
pub use memory::{MemoryKey, MemoryRegistry, MemoryTree};
pub use value::RegistryValue;
#[cfg(windows)]
pub use windows::{WindowsKey, WindowsRegistry};

#[cfg(test)]
mod tests;
