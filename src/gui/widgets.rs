//! Shared presentational leaves: loader, empty state, banners, badge

use egui::{RichText, Ui};

use crate::gui::constants::{ERROR_COLOR, SUCCESS_COLOR};
use crate::model::AttendanceStatus;

pub fn loader(ui: &mut Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(message);
    });
}

pub fn empty_state(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new(message).weak());
        ui.add_space(12.0);
    });
}

/// Render whichever page banners are set.
pub fn banners(ui: &mut Ui, error: Option<&str>, success: Option<&str>) {
    if let Some(message) = error {
        ui.colored_label(ERROR_COLOR, message);
    }
    if let Some(message) = success {
        ui.colored_label(SUCCESS_COLOR, message);
    }
}

pub fn status_badge(ui: &mut Ui, status: AttendanceStatus) {
    let color = match status {
        AttendanceStatus::Present => SUCCESS_COLOR,
        AttendanceStatus::Absent => ERROR_COLOR,
    };
    ui.colored_label(color, status.to_string());
}
