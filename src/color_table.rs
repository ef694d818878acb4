//! Fixed-size indexed palette of a settings snapshot.

use serde::Serialize;

use crate::config::{PALETTE_SIZE, defaults};
use crate::error::SettingsError;

/// The 16-entry ANSI palette of a snapshot, packed as `0x00RRGGBB`.
///
/// Indices are signed so that callers passing raw integers get a typed
/// error for negative values instead of a wrap-around. Every slot always
/// holds a concrete color; a fresh table holds the baseline palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorTable([u32; PALETTE_SIZE]);

impl ColorTable {
    /// Number of entries
    pub const LEN: usize = PALETTE_SIZE;

    pub const fn from_array(entries: [u32; PALETTE_SIZE]) -> Self {
        Self(entries)
    }

    /// Read the entry at `index`
    pub fn get(&self, index: i32) -> Result<u32, SettingsError> {
        Self::slot(index).map(|i| self.0[i])
    }

    /// Overwrite the entry at `index`
    pub fn set(&mut self, index: i32, value: u32) -> Result<(), SettingsError> {
        let i = Self::slot(index)?;
        self.0[i] = value;
        Ok(())
    }

    /// Overwrite every entry, in index order
    pub fn set_all(&mut self, entries: &[u32; PALETTE_SIZE]) {
        for (slot, value) in self.0.iter_mut().zip(entries) {
            *slot = *value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_array(&self) -> &[u32; PALETTE_SIZE] {
        &self.0
    }

    fn slot(index: i32) -> Result<usize, SettingsError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < PALETTE_SIZE)
            .ok_or(SettingsError::ColorIndexOutOfRange { index })
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self(defaults::color_table())
    }
}

impl From<[u32; PALETTE_SIZE]> for ColorTable {
    fn from(entries: [u32; PALETTE_SIZE]) -> Self {
        Self(entries)
    }
}
