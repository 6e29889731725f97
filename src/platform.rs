//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for navigation and editing shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Go-to-signin shortcut display
#[cfg(target_os = "macos")]
pub const SIGNIN_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const SIGNIN_SHORTCUT: &str = "Ctrl+L";

/// Clear-image shortcut display
#[cfg(target_os = "macos")]
pub const CLEAR_IMAGE_SHORTCUT: &str = "Cmd+U";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_IMAGE_SHORTCUT: &str = "Ctrl+U";

/// True when the key carries the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
