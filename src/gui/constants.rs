//! GUI-specific constants for layout and status colors

use egui::Color32;

/// Minimum window dimensions; the initial size comes from config
pub const WINDOW_MIN_WIDTH: f32 = 720.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Navigation sidebar width
pub const SIDEBAR_WIDTH: f32 = 160.0;

/// Banner and badge colors
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 160, 70);
pub const ERROR_COLOR: Color32 = Color32::from_rgb(200, 0, 0);

/// Input widths
pub const FORM_FIELD_WIDTH: f32 = 220.0;
pub const DATE_FIELD_WIDTH: f32 = 140.0;
