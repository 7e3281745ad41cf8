//! Profile page state.

use crate::fixtures;
use crate::model::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    profile: UserProfile,
    is_editing: bool,
}

impl ProfileState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            is_editing: false,
        }
    }

    /// State backed by the built-in demo profile.
    pub fn demo() -> Self {
        Self::new(fixtures::user_profile())
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Flips edit mode. Editing never changes the stored profile.
    pub fn toggle_editing(&mut self) {
        self.is_editing = !self.is_editing;
    }
}
