//! Profile collection management.
//!
//! Provides `ProfileManager`, which stores profiles keyed by GUID, maintains
//! display order, and answers the lookups profile resolution needs: by GUID,
//! by name, and the first visible profile.

use std::collections::HashMap;

use super::profile::{Profile, ProfileId};

/// Manages a collection of profiles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileManager {
    /// All profiles indexed by ID
    profiles: HashMap<ProfileId, Profile>,

    /// Ordered list of profile IDs for display
    order: Vec<ProfileId>,
}

impl ProfileManager {
    /// Create a new empty profile manager
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a profile manager from a list of profiles
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let mut manager = Self::new();
        for profile in profiles {
            if manager.add(profile).is_some() {
                log::debug!("Duplicate profile GUID replaced an earlier entry");
            }
        }
        manager.sort_by_order();
        manager
    }

    /// Add a profile, returning the profile it replaced if the GUID was taken
    pub fn add(&mut self, profile: Profile) -> Option<Profile> {
        let id = profile.guid;
        if !self.order.contains(&id) {
            self.order.push(id);
        }
        self.profiles.insert(id, profile)
    }

    /// Get a profile by ID
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    /// Get all profiles in display order
    pub fn profiles_ordered(&self) -> Vec<&Profile> {
        self.order
            .iter()
            .filter_map(|id| self.profiles.get(id))
            .collect()
    }

    /// Get all profiles as a vector (for serialization)
    pub fn to_vec(&self) -> Vec<Profile> {
        self.profiles_ordered().into_iter().cloned().collect()
    }

    /// Get the number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Sort profiles by their order field (stable, so ties keep insertion order)
    fn sort_by_order(&mut self) {
        self.order
            .sort_by_key(|id| self.profiles.get(id).map(|p| p.order).unwrap_or(usize::MAX));
    }

    /// Find a profile by name.
    ///
    /// An exact match wins; otherwise the first case-insensitive match in
    /// display order is returned.
    pub fn find_by_name(&self, name: &str) -> Option<&Profile> {
        let ordered = self.profiles_ordered();
        if let Some(exact) = ordered.iter().find(|p| p.name == name) {
            return Some(*exact);
        }
        let lower = name.to_lowercase();
        ordered.into_iter().find(|p| p.name.to_lowercase() == lower)
    }

    /// The first non-hidden profile in display order
    pub fn first_visible(&self) -> Option<&Profile> {
        self.profiles_ordered().into_iter().find(|p| !p.hidden)
    }
}
