//! Attendance screen: mark form, mutually exclusive filters, records table
//!
//! The employee and date filters are exclusive: picking an employee
//! clears the date filter and hides its input. Every filter change
//! re-fetches the records with the new filter applied, except while the
//! initial dual load is still in progress.

use std::sync::mpsc::{Receiver, Sender, channel};

use chrono::{Local, NaiveDate};
use eframe::egui;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::gui::constants::*;
use crate::gui::widgets;
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, display_name};
use crate::net::Backend;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field buffers for the mark-attendance card. The date is text standing
/// in for a date widget; it defaults to today.
#[derive(Debug, Clone)]
struct AttendanceForm {
    employee_id: String,
    date: String,
    status: AttendanceStatus,
}

impl AttendanceForm {
    fn new() -> Self {
        Self {
            employee_id: String::new(),
            date: Local::now().date_naive().to_string(),
            status: AttendanceStatus::Present,
        }
    }
}

/// Responses delivered back from the request tasks.
enum AttendanceMsg {
    /// Mount-time dual fetch, joined all-or-nothing.
    Initial {
        seq: u64,
        result: Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError>,
    },
    /// Filter-driven or post-mutation record fetch.
    Records {
        seq: u64,
        result: Result<Vec<AttendanceRecord>, ApiError>,
    },
    Marked {
        result: Result<(), ApiError>,
    },
}

pub struct AttendancePage {
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
    submitting: bool,
    form: AttendanceForm,
    /// Exclusive filters: a set employee filter hides the date input.
    filter_employee: Option<String>,
    filter_date: String,
    /// Generation counter for record fetches; stale responses are discarded.
    load_seq: u64,
    tx: Sender<AttendanceMsg>,
    rx: Receiver<AttendanceMsg>,
}

impl AttendancePage {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            employees: Vec::new(),
            records: Vec::new(),
            loading: true,
            error: None,
            success: None,
            submitting: false,
            form: AttendanceForm::new(),
            filter_employee: None,
            filter_date: String::new(),
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
            let _ = tx.send(AttendanceMsg::Initial { seq, result });
        });
    }

    fn parsed_filter_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.filter_date, DATE_FORMAT).ok()
    }

    /// Apply a new employee filter selection; returns true when the
    /// records must be re-fetched. Setting an employee clears the date
    /// filter. Re-fetches are suppressed during the initial load.
    fn set_employee_filter(&mut self, selection: Option<String>) -> bool {
        if selection == self.filter_employee {
            return false;
        }
        self.filter_employee = selection;
        if self.filter_employee.is_some() {
            self.filter_date.clear();
        }
        !self.loading
    }

    /// Apply new date-filter text; returns true when the records must be
    /// re-fetched. A fetch fires only when the text is empty or a valid
    /// calendar date, the way a date widget would constrain it.
    fn set_date_filter(&mut self, text: String) -> bool {
        if text == self.filter_date {
            return false;
        }
        self.filter_date = text;
        if self.loading {
            return false;
        }
        self.filter_date.is_empty() || self.parsed_filter_date().is_some()
    }

    fn reload_records(&mut self, backend: &Backend) {
        self.load_seq += 1;
        let seq = self.load_seq;
        let client = backend.client();
        let tx = self.tx.clone();
        let filter_employee = self.filter_employee.clone();
        let filter_date = self.parsed_filter_date();
        backend.spawn(async move {
            let result = match filter_employee {
                Some(employee_id) => client.attendance_by_employee(&employee_id).await,
                None => client.list_attendance(filter_date).await,
            };
            let _ = tx.send(AttendanceMsg::Records { seq, result });
        });
    }

    /// Clear banners and validate; returns the record to create only when
    /// employee, date and status are all present and the date parses.
    fn prepare_submit(&mut self) -> Option<AttendanceRecord> {
        self.error = None;
        self.success = None;
        if self.form.employee_id.is_empty() || self.form.date.is_empty() {
            self.error = Some("All fields are required".to_string());
            return None;
        }
        let Ok(date) = NaiveDate::parse_from_str(&self.form.date, DATE_FORMAT) else {
            self.error = Some("Invalid date, expected YYYY-MM-DD".to_string());
            return None;
        };
        Some(AttendanceRecord {
            employee_id: self.form.employee_id.clone(),
            date,
            status: self.form.status,
        })
    }

    fn submit(&mut self, backend: &Backend) {
        let Some(record) = self.prepare_submit() else {
            return;
        };
        self.submitting = true;
        info!(employee_id = %record.employee_id, date = %record.date, status = %record.status, "marking attendance");
        let client = backend.client();
        let tx = self.tx.clone();
        backend.spawn(async move {
            let result = client.mark_attendance(&record).await.map(|_| ());
            let _ = tx.send(AttendanceMsg::Marked { result });
        });
    }

    /// Apply one response; returns true when the filtered records must be
    /// re-fetched (successful mark).
    fn handle_msg(&mut self, msg: AttendanceMsg) -> bool {
        match msg {
            AttendanceMsg::Initial { seq, result } => {
                if seq != self.load_seq {
                    debug!(seq, latest = self.load_seq, "discarding stale initial load");
                    return false;
                }
                self.loading = false;
                match result {
                    Ok((employees, records)) => {
                        info!(
                            employees = employees.len(),
                            records = records.len(),
                            "attendance screen loaded"
                        );
                        self.employees = employees;
                        self.records = records;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to load attendance screen");
                        self.error = Some(err.message().to_string());
                    }
                }
                false
            }
            AttendanceMsg::Records { seq, result } => {
                if seq != self.load_seq {
                    debug!(seq, latest = self.load_seq, "discarding stale record fetch");
                    return false;
                }
                // the mark control stays disabled until the follow-up
                // fetch lands, so the flag is released here
                self.submitting = false;
                match result {
                    Ok(records) => {
                        self.records = records;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to load attendance records");
                        self.error = Some(err.message().to_string());
                    }
                }
                false
            }
            AttendanceMsg::Marked { result } => match result {
                Ok(()) => {
                    self.success = Some("Attendance marked successfully!".to_string());
                    true
                }
                Err(err) => {
                    error!(error = %err, "failed to mark attendance");
                    self.submitting = false;
                    self.error = Some(err.message().to_string());
                    false
                }
            },
        }
    }

    fn drain_messages(&mut self, backend: &Backend) {
        while let Ok(msg) = self.rx.try_recv() {
            if self.handle_msg(msg) {
                self.reload_records(backend);
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        self.drain_messages(backend);

        ui.heading("Attendance");
        ui.label(egui::RichText::new("Track and manage daily employee attendance").weak());
        ui.add_space(SECTION_SPACING);

        self.mark_form(ui, backend);
        ui.add_space(SECTION_SPACING);
        self.records_card(ui, backend);
    }

    fn mark_form(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Mark Attendance").strong());
            ui.add_space(ITEM_SPACING);
            widgets::banners(ui, self.error.as_deref(), self.success.as_deref());

            egui::Grid::new("attendance_form")
                .num_columns(2)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label("Employee:");
                    let selected_text = if self.form.employee_id.is_empty() {
                        "-- Select Employee --".to_string()
                    } else {
                        employee_option_label(&self.employees, &self.form.employee_id)
                    };
                    egui::ComboBox::from_id_salt("attendance_form_employee")
                        .width(FORM_FIELD_WIDTH)
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.form.employee_id,
                                String::new(),
                                "-- Select Employee --",
                            );
                            for employee in &self.employees {
                                ui.selectable_value(
                                    &mut self.form.employee_id,
                                    employee.employee_id.clone(),
                                    format!(
                                        "{} ({})",
                                        employee.full_name, employee.employee_id
                                    ),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Date:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(DATE_FIELD_WIDTH),
                    );
                    ui.end_row();

                    ui.label("Status:");
                    egui::ComboBox::from_id_salt("attendance_form_status")
                        .selected_text(self.form.status.to_string())
                        .show_ui(ui, |ui| {
                            for status in AttendanceStatus::iter() {
                                ui.selectable_value(
                                    &mut self.form.status,
                                    status,
                                    status.to_string(),
                                );
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(ITEM_SPACING);
            let label = if self.submitting {
                "Marking..."
            } else {
                "Mark Attendance"
            };
            if ui
                .add_enabled(!self.submitting, egui::Button::new(label))
                .clicked()
            {
                self.submit(backend);
            }
        });
    }

    fn records_card(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Attendance Records").strong());
            ui.add_space(ITEM_SPACING);
            self.filter_bar(ui, backend);
            ui.add_space(ITEM_SPACING);

            if self.loading {
                widgets::loader(ui, "Loading attendance records...");
            } else if self.records.is_empty() {
                widgets::empty_state(ui, "No attendance records found.");
            } else {
                egui::Grid::new("attendance_table")
                    .num_columns(4)
                    .striped(true)
                    .spacing([SECTION_SPACING, ITEM_SPACING])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Employee").strong());
                        ui.label(egui::RichText::new("Employee ID").strong());
                        ui.label(egui::RichText::new("Date").strong());
                        ui.label(egui::RichText::new("Status").strong());
                        ui.end_row();

                        for record in &self.records {
                            ui.label(display_name(&self.employees, &record.employee_id));
                            ui.label(&record.employee_id);
                            ui.label(record.date.to_string());
                            widgets::status_badge(ui, record.status);
                            ui.end_row();
                        }
                    });
            }
        });
    }

    fn filter_bar(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        let mut reload = false;

        ui.horizontal(|ui| {
            let selected_text = match &self.filter_employee {
                None => "All Employees".to_string(),
                Some(id) => employee_option_label(&self.employees, id),
            };
            let mut selection = self.filter_employee.clone();
            egui::ComboBox::from_id_salt("attendance_filter_employee")
                .width(FORM_FIELD_WIDTH)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selection, None, "All Employees");
                    for employee in &self.employees {
                        ui.selectable_value(
                            &mut selection,
                            Some(employee.employee_id.clone()),
                            format!("{} ({})", employee.full_name, employee.employee_id),
                        );
                    }
                });
            if selection != self.filter_employee {
                reload = self.set_employee_filter(selection);
            }

            // the date input exists only while no employee filter is active
            if self.filter_employee.is_none() {
                let mut date_text = self.filter_date.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut date_text)
                        .hint_text("Filter by date (YYYY-MM-DD)")
                        .desired_width(FORM_FIELD_WIDTH),
                );
                if response.changed() {
                    reload = self.set_date_filter(date_text) || reload;
                }
            }
        });

        if reload {
            self.reload_records(backend);
        }
    }
}

fn employee_option_label(employees: &[Employee], employee_id: &str) -> String {
    format!("{} ({})", display_name(employees, employee_id), employee_id)
}
