//! Terminal mode management
//!
//! Enables raw mode, the alternate screen and mouse capture for the demo,
//! tracking which ones succeeded so `undo()` restores only those.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
///
/// Call `undo()` (or drop the value) to restore the original state.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable all modes. Mouse capture is optional; the others are not, and
    /// a failure undoes whatever was already enabled.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        if let Err(e) = stdout().execute(EnableMouseCapture) {
            // Keyboard navigation still works without it
            tracing::warn!("Failed to enable mouse capture: {}", e);
        } else {
            modes.mouse_capture = true;
            tracing::debug!("Enabled mouse capture");
        }

        Ok(modes)
    }

    /// Disable every mode that was enabled. Safe to call more than once.
    pub fn undo(&mut self) {
        if self.mouse_capture {
            let _ = stdout().execute(DisableMouseCapture);
            self.mouse_capture = false;
            tracing::debug!("Disabled mouse capture");
        }

        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }

    pub fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture
    }

    pub fn alternate_screen_enabled(&self) -> bool {
        self.alternate_screen
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Restore the terminal without tracking, for panic hooks
pub fn emergency_cleanup() {
    let _ = stdout().execute(DisableMouseCapture);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
