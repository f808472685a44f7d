//! Employee directory screen: add form, listing, delete behind a
//! confirmation dialog
//!
//! All state transitions happen in plain methods (`mount`, `submit`,
//! `handle_msg`, the dialog handlers) so they stay testable without a
//! running UI; `ui` only renders and routes clicks into them.

use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::egui;
use tracing::{debug, error, info};

use crate::api::ApiError;
use crate::gui::constants::*;
use crate::gui::widgets;
use crate::model::Employee;
use crate::net::Backend;

/// Field buffers for the add-employee card.
#[derive(Debug, Default, Clone)]
struct EmployeeForm {
    employee_id: String,
    full_name: String,
    email: String,
    department: String,
}

impl EmployeeForm {
    /// Presence check only: no email format or uniqueness validation.
    fn is_complete(&self) -> bool {
        !self.employee_id.is_empty()
            && !self.full_name.is_empty()
            && !self.email.is_empty()
            && !self.department.is_empty()
    }

    fn to_employee(&self) -> Employee {
        Employee {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

/// Responses delivered back from the request tasks.
enum EmployeesMsg {
    Loaded {
        seq: u64,
        result: Result<Vec<Employee>, ApiError>,
    },
    Added {
        result: Result<(), ApiError>,
    },
    Deleted {
        employee_id: String,
        result: Result<(), ApiError>,
    },
}

pub struct EmployeesPage {
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
    submitting: bool,
    form: EmployeeForm,
    /// Target of the open confirmation dialog, if any.
    pending_delete: Option<String>,
    /// Generation counter for list fetches; stale responses are discarded.
    load_seq: u64,
    tx: Sender<EmployeesMsg>,
    rx: Receiver<EmployeesMsg>,
}

impl EmployeesPage {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            employees: Vec::new(),
            loading: true,
            error: None,
            success: None,
            submitting: false,
            form: EmployeeForm::default(),
            pending_delete: None,
            load_seq: 0,
            tx,
            rx,
        }
    }

    pub fn mount(&mut self, backend: &Backend) {
        self.reload(backend);
    }

    fn reload(&mut self, backend: &Backend) {
        self.loading = true;
        self.load_seq += 1;
        let seq = self.load_seq;
        let client = backend.client();
        let tx = self.tx.clone();
        backend.spawn(async move {
            let result = client.list_employees().await;
            let _ = tx.send(EmployeesMsg::Loaded { seq, result });
        });
    }

    /// Clear banners and validate; returns the create payload only when
    /// every field is present, otherwise sets the error banner and keeps
    /// the entered values.
    fn prepare_submit(&mut self) -> Option<Employee> {
        self.error = None;
        self.success = None;
        if !self.form.is_complete() {
            self.error = Some("All fields are required".to_string());
            return None;
        }
        Some(self.form.to_employee())
    }

    fn submit(&mut self, backend: &Backend) {
        let Some(employee) = self.prepare_submit() else {
            return;
        };
        self.submitting = true;
        info!(employee_id = %employee.employee_id, "adding employee");
        let client = backend.client();
        let tx = self.tx.clone();
        backend.spawn(async move {
            let result = client.add_employee(&employee).await.map(|_| ());
            let _ = tx.send(EmployeesMsg::Added { result });
        });
    }

    fn delete(&mut self, backend: &Backend, employee_id: String) {
        self.error = None;
        info!(employee_id = %employee_id, "deleting employee");
        let client = backend.client();
        let tx = self.tx.clone();
        backend.spawn(async move {
            let result = client.delete_employee(&employee_id).await;
            let _ = tx.send(EmployeesMsg::Deleted {
                employee_id,
                result,
            });
        });
    }

    /// Apply one response; returns true when the collection must be
    /// re-fetched (successful mutation).
    fn handle_msg(&mut self, msg: EmployeesMsg) -> bool {
        match msg {
            EmployeesMsg::Loaded { seq, result } => {
                if seq != self.load_seq {
                    debug!(seq, latest = self.load_seq, "discarding stale employee list");
                    return false;
                }
                self.loading = false;
                // the add control stays disabled until the follow-up
                // reload lands, so the flag is released here
                self.submitting = false;
                match result {
                    Ok(employees) => {
                        info!(count = employees.len(), "employee list loaded");
                        self.employees = employees;
                        self.error = None;
                    }
                    Err(err) => {
                        error!(error = %err, "failed to load employees");
                        self.error = Some(err.message().to_string());
                    }
                }
                false
            }
            EmployeesMsg::Added { result } => match result {
                Ok(()) => {
                    self.success = Some("Employee added successfully!".to_string());
                    self.form = EmployeeForm::default();
                    true
                }
                Err(err) => {
                    error!(error = %err, "failed to add employee");
                    self.submitting = false;
                    self.error = Some(err.message().to_string());
                    false
                }
            },
            EmployeesMsg::Deleted {
                employee_id,
                result,
            } => match result {
                Ok(()) => {
                    self.success = Some(format!("Employee \"{employee_id}\" deleted successfully"));
                    true
                }
                Err(err) => {
                    error!(error = %err, employee_id = %employee_id, "failed to delete employee");
                    self.error = Some(err.message().to_string());
                    false
                }
            },
        }
    }

    fn drain_messages(&mut self, backend: &Backend) {
        while let Ok(msg) = self.rx.try_recv() {
            if self.handle_msg(msg) {
                self.reload(backend);
            }
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        self.drain_messages(backend);

        ui.heading("Employees");
        ui.label(egui::RichText::new("Manage your organization's employee records").weak());
        ui.add_space(SECTION_SPACING);

        self.add_form(ui, backend);
        ui.add_space(SECTION_SPACING);
        self.employee_table(ui);

        self.delete_confirm_dialog(ui.ctx(), backend);
    }

    fn add_form(&mut self, ui: &mut egui::Ui, backend: &Backend) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Add New Employee").strong());
            ui.add_space(ITEM_SPACING);
            widgets::banners(ui, self.error.as_deref(), self.success.as_deref());

            egui::Grid::new("employee_form")
                .num_columns(2)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label("Employee ID:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.employee_id)
                            .hint_text("e.g. EMP001")
                            .desired_width(FORM_FIELD_WIDTH),
                    );
                    ui.end_row();

                    ui.label("Full Name:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.full_name)
                            .hint_text("e.g. John Doe")
                            .desired_width(FORM_FIELD_WIDTH),
                    );
                    ui.end_row();

                    ui.label("Email Address:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.email)
                            .hint_text("e.g. john@company.com")
                            .desired_width(FORM_FIELD_WIDTH),
                    );
                    ui.end_row();

                    ui.label("Department:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.department)
                            .hint_text("e.g. Engineering")
                            .desired_width(FORM_FIELD_WIDTH),
                    );
                    ui.end_row();
                });

            ui.add_space(ITEM_SPACING);
            let label = if self.submitting {
                "Adding..."
            } else {
                "Add Employee"
            };
            if ui
                .add_enabled(!self.submitting, egui::Button::new(label))
                .clicked()
            {
                self.submit(backend);
            }
        });
    }

    fn employee_table(&mut self, ui: &mut egui::Ui) {
        let mut request_delete: Option<String> = None;

        ui.group(|ui| {
            ui.label(egui::RichText::new(format!("All Employees ({})", self.employees.len())).strong());
            ui.add_space(ITEM_SPACING);

            if self.loading {
                widgets::loader(ui, "Loading employees...");
            } else if self.employees.is_empty() {
                widgets::empty_state(ui, "No employees added yet. Add your first employee above.");
            } else {
                egui::Grid::new("employee_table")
                    .num_columns(5)
                    .striped(true)
                    .spacing([SECTION_SPACING, ITEM_SPACING])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Employee ID").strong());
                        ui.label(egui::RichText::new("Full Name").strong());
                        ui.label(egui::RichText::new("Email").strong());
                        ui.label(egui::RichText::new("Department").strong());
                        ui.label("");
                        ui.end_row();

                        for employee in &self.employees {
                            ui.label(&employee.employee_id);
                            ui.label(&employee.full_name);
                            ui.label(&employee.email);
                            ui.label(&employee.department);
                            if ui
                                .button(egui::RichText::new("Delete").color(ERROR_COLOR))
                                .clicked()
                            {
                                request_delete = Some(employee.employee_id.clone());
                            }
                            ui.end_row();
                        }
                    });
            }
        });

        if request_delete.is_some() {
            self.pending_delete = request_delete;
        }
    }

    fn delete_confirm_dialog(&mut self, ctx: &egui::Context, backend: &Backend) {
        let Some(employee_id) = self.pending_delete.clone() else {
            return;
        };

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete employee \"{employee_id}\"?"
                ));
                ui.add_space(ITEM_SPACING);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.pending_delete = None;
                        self.delete(backend, employee_id.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        // declined: no request is issued
                        self.pending_delete = None;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            full_name: format!("Employee {id}"),
            email: format!("{id}@x.com"),
            department: "Eng".to_string(),
        }
    }

    fn filled_page() -> EmployeesPage {
        let mut page = EmployeesPage::new();
        page.form.employee_id = "EMP001".to_string();
        page.form.full_name = "John Doe".to_string();
        page.form.email = "john@company.com".to_string();
        page.form.department = "Engineering".to_string();
        page
    }

    #[test]
    fn prepare_submit_rejects_incomplete_form_without_request() {
        let mut page = filled_page();
        page.form.full_name.clear();

        assert!(page.prepare_submit().is_none());
        assert_eq!(page.error.as_deref(), Some("All fields are required"));
        // other entered values are retained
        assert_eq!(page.form.employee_id, "EMP001");
        assert_eq!(page.form.email, "john@company.com");
        assert_eq!(page.form.department, "Engineering");
    }

    #[test]
    fn prepare_submit_builds_payload_and_clears_banners() {
        let mut page = filled_page();
        page.error = Some("old".to_string());
        page.success = Some("old".to_string());

        let payload = page.prepare_submit().unwrap();
        assert_eq!(payload.employee_id, "EMP001");
        assert_eq!(payload.full_name, "John Doe");
        assert!(page.error.is_none());
        assert!(page.success.is_none());
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut page = EmployeesPage::new();
        page.load_seq = 3;

        let reload = page.handle_msg(EmployeesMsg::Loaded {
            seq: 2,
            result: Ok(vec![employee("E1")]),
        });
        assert!(!reload);
        assert!(page.employees.is_empty());
        assert!(page.loading);
    }

    #[test]
    fn current_list_response_replaces_snapshot() {
        let mut page = EmployeesPage::new();
        page.load_seq = 1;
        page.error = Some("previous failure".to_string());

        page.handle_msg(EmployeesMsg::Loaded {
            seq: 1,
            result: Ok(vec![employee("E1"), employee("E2")]),
        });
        assert_eq!(page.employees.len(), 2);
        assert!(!page.loading);
        assert!(page.error.is_none());
    }

    #[test]
    fn failed_load_keeps_snapshot_and_sets_banner() {
        let mut page = EmployeesPage::new();
        page.load_seq = 1;
        page.employees = vec![employee("E1")];

        page.handle_msg(EmployeesMsg::Loaded {
            seq: 1,
            result: Err(ApiError::new("Request failed with status 500")),
        });
        assert_eq!(page.employees.len(), 1);
        assert_eq!(
            page.error.as_deref(),
            Some("Request failed with status 500")
        );
    }

    #[test]
    fn successful_add_clears_form_and_requests_reload() {
        let mut page = filled_page();
        page.submitting = true;

        let reload = page.handle_msg(EmployeesMsg::Added { result: Ok(()) });
        assert!(reload);
        assert_eq!(page.success.as_deref(), Some("Employee added successfully!"));
        assert!(page.form.employee_id.is_empty());
        assert!(page.form.full_name.is_empty());
        // control stays disabled until the reload lands
        assert!(page.submitting);
    }

    #[test]
    fn failed_add_keeps_form_and_surfaces_error() {
        let mut page = filled_page();
        page.submitting = true;

        let reload = page.handle_msg(EmployeesMsg::Added {
            result: Err(ApiError::new("duplicate entry")),
        });
        assert!(!reload);
        assert_eq!(page.error.as_deref(), Some("duplicate entry"));
        assert_eq!(page.form.employee_id, "EMP001");
        assert!(!page.submitting);
    }

    #[test]
    fn successful_delete_requests_reload_with_banner() {
        let mut page = EmployeesPage::new();
        let reload = page.handle_msg(EmployeesMsg::Deleted {
            employee_id: "EMP001".to_string(),
            result: Ok(()),
        });
        assert!(reload);
        assert_eq!(
            page.success.as_deref(),
            Some("Employee \"EMP001\" deleted successfully")
        );
    }

    #[test]
    fn failed_delete_keeps_collection() {
        let mut page = EmployeesPage::new();
        page.employees = vec![employee("E1")];

        let reload = page.handle_msg(EmployeesMsg::Deleted {
            employee_id: "E1".to_string(),
            result: Err(ApiError::new("Request failed with status 404")),
        });
        assert!(!reload);
        assert_eq!(page.employees.len(), 1);
        assert_eq!(
            page.error.as_deref(),
            Some("Request failed with status 404")
        );
    }
}
