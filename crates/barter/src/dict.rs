//! Resource dictionary: interning of resource names into dense ids.
//!
//! Ids are handed out in first-seen order and never reused, so the dictionary
//! size always equals the number of distinct names looked up.

use std::collections::HashMap;
use std::fmt;

use crate::graph::ResourceId;

/// Lookup failure for an id that was never allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictError {
    NotFound(ResourceId),
}

impl fmt::Display for DictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictError::NotFound(id) => write!(f, "resource id {} was never interned", id.0),
        }
    }
}

impl std::error::Error for DictError {}

/// Bidirectional name ↔ id mapping.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    by_name: HashMap<String, ResourceId>,
    names: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, allocating the next sequential id on first sight.
    pub fn intern(&mut self, name: &str) -> ResourceId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ResourceId(self.names.len());
        self.by_name.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Id for `name` without allocating.
    pub fn get(&self, name: &str) -> Option<ResourceId> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, id: ResourceId) -> Result<&str, DictError> {
        self.names
            .get(id.0)
            .map(String::as_str)
            .ok_or(DictError::NotFound(id))
    }

    /// Number of distinct resources interned so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_first_seen_and_stable() {
        let mut d = Dictionary::new();
        let g = d.intern("g");
        let axe = d.intern("Hand Axe");
        assert_eq!(g, ResourceId(0));
        assert_eq!(axe, ResourceId(1));
        assert_eq!(d.intern("g"), g);
        assert_eq!(d.len(), 2);
        assert_eq!(d.name_of(axe).unwrap(), "Hand Axe");
        assert_eq!(d.get("Hand Axe"), Some(axe));
        assert_eq!(d.get("Ruby Crown"), None);
        // `get` never grows the dictionary.
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn name_of_unknown_id_is_not_found() {
        let mut d = Dictionary::new();
        d.intern("g");
        assert_eq!(
            d.name_of(ResourceId(3)),
            Err(DictError::NotFound(ResourceId(3)))
        );
    }
}
