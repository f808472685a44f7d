//! Dashboard screen: headline stats, recent activity, department breakdown
//!
//! Loads its snapshot once on mount; every aggregate shown is recomputed
//! from the raw collections on each frame.

use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::egui;
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::gui::constants::*;
use crate::gui::widgets;
use crate::model::{AttendanceRecord, Employee, display_name};
use crate::net::Backend;
use crate::stats::{self, DashboardStats};

enum DashboardMsg {
    Loaded {
        seq: u64,
        result: Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError>,
    },
}

pub struct DashboardPage {
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
    loading: bool,
    error: Option<String>,
    load_seq: u64,
    tx: Sender<DashboardMsg>,
    rx: Receiver<DashboardMsg>,
}

impl DashboardPage {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            employees: Vec::new(),
            records: Vec::new(),
            loading: true,
            error: None,
            load_seq: 0,
            tx,
            rx,
        }
    }

    pub fn mount(&mut self, backend: &Backend) {
        self.loading = true;
        self.load_seq += 1;
        let seq = self.load_seq;
        let client = backend.client();
        let tx = self.tx.clone();
        backend.spawn(async move {
            let result = tokio::try_join!(client.list_employees(), client.list_attendance(None));
            let _ = tx.send(DashboardMsg::Loaded { seq, result });
        });
    }

    fn handle_msg(&mut self, msg: DashboardMsg) {
        match msg {
            DashboardMsg::Loaded { seq, result } => {
                if seq != self.load_seq {
                    debug!(seq, latest = self.load_seq, "discarding stale dashboard load");
                    return;
                }
                self.loading = false;
                match result {
                    Ok((employees, records)) => {
                        info!(
                            employees = employees.len(),
                            records = records.len(),
                            "dashboard loaded"
                        );
                        self.employees = employees;
                        self.records = records;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to load dashboard");
                        self.error = Some(err.message().to_string());
                    }
                }
            }
        }
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_msg(msg);
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, _backend: &Backend) {
        self.drain_messages();

        if self.loading {
            widgets::loader(ui, "Loading dashboard...");
            return;
        }

        ui.heading("Dashboard");
        ui.label(egui::RichText::new("Overview of your HR management system").weak());
        ui.add_space(SECTION_SPACING);

        widgets::banners(ui, self.error.as_deref(), None);

        // derived fresh from the snapshot every frame, nothing cached
        let stats = DashboardStats::from_snapshot(&self.employees, &self.records);

        ui.horizontal(|ui| {
            stat_card(ui, "Total Employees", stats.total_employees, None);
            stat_card(ui, "Departments", stats.departments.len(), None);
            stat_card(ui, "Total Present", stats.total_present, Some(SUCCESS_COLOR));
            stat_card(ui, "Total Absent", stats.total_absent, Some(ERROR_COLOR));
        });

        ui.add_space(SECTION_SPACING);
        self.recent_card(ui);

        if !stats.departments.is_empty() {
            ui.add_space(SECTION_SPACING);
            self.departments_card(ui, &stats.departments);
        }
    }

    fn recent_card(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Recent Attendance Records").strong());
            ui.add_space(ITEM_SPACING);

            let recent = stats::recent(&self.records);
            if recent.is_empty() {
                widgets::empty_state(ui, "No attendance records yet");
                return;
            }

            egui::Grid::new("dashboard_recent")
                .num_columns(3)
                .striped(true)
                .spacing([SECTION_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Employee").strong());
                    ui.label(egui::RichText::new("Date").strong());
                    ui.label(egui::RichText::new("Status").strong());
                    ui.end_row();

                    for record in recent {
                        ui.label(display_name(&self.employees, &record.employee_id));
                        ui.label(record.date.to_string());
                        widgets::status_badge(ui, record.status);
                        ui.end_row();
                    }
                });
        });
    }

    fn departments_card(&self, ui: &mut egui::Ui, departments: &[String]) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Employees by Department").strong());
            ui.add_space(ITEM_SPACING);

            egui::Grid::new("dashboard_departments")
                .num_columns(2)
                .striped(true)
                .spacing([SECTION_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Department").strong());
                    ui.label(egui::RichText::new("Employee Count").strong());
                    ui.end_row();

                    for department in departments {
                        ui.label(department);
                        ui.label(
                            stats::department_count(&self.employees, department).to_string(),
                        );
                        ui.end_row();
                    }
                });
        });
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: usize, color: Option<egui::Color32>) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).weak());
            let text = egui::RichText::new(value.to_string()).heading().strong();
            match color {
                Some(color) => ui.label(text.color(color)),
                None => ui.label(text),
            };
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;
    use chrono::NaiveDate;

    fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{id}@x.com"),
            department: department.to_string(),
        }
    }

    fn record(id: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn successful_load_replaces_snapshot() {
        let mut page = DashboardPage::new();
        page.load_seq = 1;
        page.handle_msg(DashboardMsg::Loaded {
            seq: 1,
            result: Ok((vec![employee("E1", "Ann", "Eng")], vec![record("E1")])),
        });
        assert!(!page.loading);
        assert_eq!(page.employees.len(), 1);
        assert_eq!(page.records.len(), 1);
        assert!(page.error.is_none());
    }

    #[test]
    fn failed_load_surfaces_banner_and_keeps_empty_snapshot() {
        let mut page = DashboardPage::new();
        page.load_seq = 1;
        page.handle_msg(DashboardMsg::Loaded {
            seq: 1,
            result: Err(ApiError::new("Request failed with status 500")),
        });
        assert!(!page.loading);
        assert!(page.employees.is_empty());
        assert_eq!(
            page.error.as_deref(),
            Some("Request failed with status 500")
        );
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut page = DashboardPage::new();
        page.load_seq = 2;
        page.handle_msg(DashboardMsg::Loaded {
            seq: 1,
            result: Ok((vec![employee("E1", "Ann", "Eng")], Vec::new())),
        });
        assert!(page.loading);
        assert!(page.employees.is_empty());
    }
}
