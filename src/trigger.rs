//! Typed configs carried from a trigger button to its handler.
//!
//! The team tables render one button per row with the row's values in
//! `data-*` attributes. These types read them once, up front, so the handler
//! receives plain fields and a missing attribute is reported by name.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use crate::consts::{DATA_TEAM_DESC, DATA_TEAM_ID, DATA_TEAM_NAME, DATA_TEAM_SUP, DATA_URL};
use crate::error::PanelError;

/// Read access to an element's dataset (`data-team-id` is key `teamId`).
pub trait Dataset {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// [`PanelError::MissingAttribute`] when `key` is absent.
    fn require(&self, key: &str) -> Result<String, PanelError> {
        self.get(key)
            .ok_or_else(|| PanelError::MissingAttribute { key: key.to_owned() })
    }
}

/// Values behind an "edit team" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTeamTrigger {
    pub team_id: String,
    pub name: String,
    pub description: String,
    pub supervisor_id: String,
    pub url: String,
}

impl EditTeamTrigger {
    /// # Errors
    ///
    /// [`PanelError::MissingAttribute`] naming the first absent key.
    pub fn from_dataset(data: &impl Dataset) -> Result<Self, PanelError> {
        Ok(Self {
            team_id: data.require(DATA_TEAM_ID)?,
            name: data.require(DATA_TEAM_NAME)?,
            description: data.require(DATA_TEAM_DESC)?,
            supervisor_id: data.require(DATA_TEAM_SUP)?,
            url: data.require(DATA_URL)?,
        })
    }
}

/// Values behind a "manage members" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageMembersTrigger {
    pub team_id: String,
    pub team_name: String,
    pub url: String,
}

impl ManageMembersTrigger {
    /// # Errors
    ///
    /// [`PanelError::MissingAttribute`] naming the first absent key.
    pub fn from_dataset(data: &impl Dataset) -> Result<Self, PanelError> {
        Ok(Self {
            team_id: data.require(DATA_TEAM_ID)?,
            team_name: data.require(DATA_TEAM_NAME)?,
            url: data.require(DATA_URL)?,
        })
    }
}
