//! Top-level app state machine
//!
//! The shell (menus, rendering, input polling) lives outside this crate, but
//! the phase structure it must follow lives here: the simulation `step()` is
//! only invoked while `Playing`. Pausing means the driver stops stepping, so
//! the frozen match state resumes exactly where it left off.

/// App phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Menu,
    Playing,
    Paused,
    Settings,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Start a match from the menu
    Play,
    OpenSettings,
    CloseSettings,
    Pause,
    Resume,
    /// Restart the current match (allowed while paused)
    Restart,
    ReturnToMenu,
}

/// App finite state machine
#[derive(Debug, Clone)]
pub struct AppFsm {
    phase: AppPhase,
}

impl Default for AppFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl AppFsm {
    pub fn new() -> Self {
        Self {
            phase: AppPhase::Menu,
        }
    }

    #[inline]
    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// Whether the driver should invoke the simulation this frame
    #[inline]
    pub fn should_step(&self) -> bool {
        self.phase == AppPhase::Playing
    }

    /// Apply an action. Returns the new phase, or `None` if the action is
    /// not valid from the current phase (the phase is left unchanged).
    pub fn apply(&mut self, action: AppAction) -> Option<AppPhase> {
        use AppAction::*;
        use AppPhase::*;

        let next = match (self.phase, action) {
            (Menu, Play) => Playing,
            (Menu, OpenSettings) => Settings,
            (Settings, CloseSettings) => Menu,
            (Playing, Pause) => Paused,
            (Paused, Resume) => Playing,
            (Paused, Restart) => Playing,
            (Paused, ReturnToMenu) => Menu,
            _ => {
                log::debug!("ignored {:?} in phase {:?}", action, self.phase);
                return None;
            }
        };

        log::debug!("phase {:?} -> {:?} on {:?}", self.phase, next, action);
        self.phase = next;
        Some(next)
    }
}
