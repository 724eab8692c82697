//! Package metadata merge
//!
//! Copies fields from a parent package definition into a child one, except
//! for the identity fields the child must always keep.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields a parent never overwrites
pub const PROTECTED_FIELDS: [&str; 9] = [
    "name",
    "prettyName",
    "id",
    "version",
    "prettyVersion",
    "replaces",
    "repository",
    "requires",
    "releaseDate",
];

/// Package metadata as a plain field/value mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageFields(BTreeMap<String, Value>);

impl PackageFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_protected(field: &str) -> bool {
        PROTECTED_FIELDS.contains(&field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy every non-protected parent field into `self`, replacing any
    /// existing value under the same name.
    pub fn merge_from_parent(&mut self, parent: &PackageFields) -> &mut Self {
        for (field, value) in &parent.0 {
            if !Self::is_protected(field) {
                self.0.insert(field.clone(), value.clone());
            }
        }
        self
    }
}

impl FromIterator<(String, Value)> for PackageFields {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
