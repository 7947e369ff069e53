use bevy::prelude::*;

/// Marks a vehicle the pilot can fly. Only an active controller receives
/// input, and the camera and HUD track the one active vehicle.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    /// A vehicle that flies hands-off until enabled.
    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Why no single piloted vehicle could be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotLookupError {
    NoActivePilot,
    MultipleActivePilots,
}

impl std::fmt::Display for PilotLookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PilotLookupError::NoActivePilot => f.write_str("no active pilot"),
            PilotLookupError::MultipleActivePilots => f.write_str("more than one active pilot"),
        }
    }
}

/// The one item whose controller is active. Disabled controllers are skipped.
pub fn single_active<T>(
    candidates: impl IntoIterator<Item = (T, PlayerController)>,
) -> Result<T, PilotLookupError> {
    let mut active = candidates
        .into_iter()
        .filter(|(_, controller)| controller.active)
        .map(|(item, _)| item);

    match (active.next(), active.next()) {
        (Some(item), None) => Ok(item),
        (None, _) => Err(PilotLookupError::NoActivePilot),
        (Some(_), Some(_)) => Err(PilotLookupError::MultipleActivePilots),
    }
}
