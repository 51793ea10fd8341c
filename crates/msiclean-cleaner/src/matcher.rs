use anyhow::Result;
use msiclean_core::{LabelRule, DISPLAY_NAME_VALUE, INSTALL_PROPERTIES_KEY, PRODUCT_NAME_VALUE};
use msiclean_registry::{KeyAccess, RegistryKey};

/// Decides whether a subkey, given its open handle and name, gets removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatcher {
    /// The subkey name equals the given name.
    ExactName(String),
    /// Any string value directly on the subkey contains the marker.
    ValueContains(String),
    /// A string value, optionally read from a nested key, satisfies the rule.
    NamedValue {
        subkey: Option<String>,
        value: String,
        labels: LabelRule,
    },
    AnyOf(Vec<KeyMatcher>),
}

impl KeyMatcher {
    /// `InstallProperties\DisplayName` of a per-user product entry.
    pub fn display_name(labels: LabelRule) -> Self {
        Self::NamedValue {
            subkey: Some(INSTALL_PROPERTIES_KEY.to_string()),
            value: DISPLAY_NAME_VALUE.to_string(),
            labels,
        }
    }

    /// `ProductName` of a classes-scoped product entry.
    pub fn product_name(labels: LabelRule) -> Self {
        Self::NamedValue {
            subkey: None,
            value: PRODUCT_NAME_VALUE.to_string(),
            labels,
        }
    }

    pub fn matches<K: RegistryKey>(&self, key: &K, name: &str) -> Result<bool> {
        match self {
            Self::ExactName(target) => Ok(name == target),
            Self::ValueContains(marker) => any_value_contains(key, marker),
            Self::NamedValue {
                subkey,
                value,
                labels,
            } => named_value_matches(key, subkey.as_deref(), value, labels),
            Self::AnyOf(matchers) => {
                for matcher in matchers {
                    if matcher.matches(key, name)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn any_value_contains<K: RegistryKey>(key: &K, marker: &str) -> Result<bool> {
    for value_name in key.value_names()? {
        if let Some(text) = key.string_value(&value_name)? {
            if text.contains(marker) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn named_value_matches<K: RegistryKey>(
    key: &K,
    subkey: Option<&str>,
    value: &str,
    labels: &LabelRule,
) -> Result<bool> {
    let text = match subkey {
        Some(subkey) => match key.open_subkey(subkey, KeyAccess::Read)? {
            Some(nested) => nested.string_value(value)?,
            None => None,
        },
        None => key.string_value(value)?,
    };
    Ok(text.is_some_and(|text| labels.matches(&text)))
}
