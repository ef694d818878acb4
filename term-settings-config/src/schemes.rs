//! Name-keyed registry of color schemes.

use std::collections::BTreeMap;

use crate::themes::ColorScheme;

/// Read-mostly mapping from scheme name to [`ColorScheme`].
///
/// Names are unique and matched exactly. Inserting a scheme whose name is
/// already present replaces the previous entry, which is how user-defined
/// schemes shadow the built-ins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSchemeRegistry {
    schemes: BTreeMap<String, ColorScheme>,
}

impl ColorSchemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            schemes: BTreeMap::new(),
        }
    }

    /// Create a registry seeded with every built-in scheme
    pub fn with_builtin() -> Self {
        Self::from_schemes(ColorScheme::builtin())
    }

    /// Create a registry from a list of schemes (later entries win on name clashes)
    pub fn from_schemes(schemes: impl IntoIterator<Item = ColorScheme>) -> Self {
        let mut registry = Self::new();
        for scheme in schemes {
            registry.insert(scheme);
        }
        registry
    }

    /// Insert a scheme, returning the one it replaced, if any
    pub fn insert(&mut self, scheme: ColorScheme) -> Option<ColorScheme> {
        self.schemes.insert(scheme.name.clone(), scheme)
    }

    /// Non-failing lookup by exact name
    pub fn try_lookup(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    /// Scheme names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorScheme> {
        self.schemes.values()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
