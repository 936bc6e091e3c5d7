//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for the signed-in banner.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for the error banner and field hints.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Indigo used for secondary links.
pub const COLOR_INDIGO: Color32 = Color32::from_rgb(129, 140, 248);
