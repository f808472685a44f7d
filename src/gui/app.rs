//! Application shell: window setup, sidebar navigation, page dispatch
//!
//! Switching screens re-creates the target page and re-runs its mount
//! load; per-screen view state is transient by design and never survives
//! navigation.

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::gui::components::{AttendancePage, DashboardPage, EmployeesPage};
use crate::gui::constants::*;
use crate::net::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Employees,
    Attendance,
}

struct HrmsApp {
    backend: Backend,
    screen: Screen,
    dashboard: DashboardPage,
    employees: EmployeesPage,
    attendance: AttendancePage,
}

impl HrmsApp {
    fn new(cc: &CreationContext<'_>, config: &AppConfig, runtime: tokio::runtime::Handle) -> Self {
        let client = ApiClient::new(&config.api_base_url);
        info!(api_base_url = %client.base_url(), "Initializing egui front-end");
        let backend = Backend::new(runtime, client, cc.egui_ctx.clone());

        let mut dashboard = DashboardPage::new();
        dashboard.mount(&backend);

        Self {
            backend,
            screen: Screen::Dashboard,
            dashboard,
            employees: EmployeesPage::new(),
            attendance: AttendancePage::new(),
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        info!(screen = ?screen, "switching screen");
        self.screen = screen;
        match screen {
            Screen::Dashboard => {
                self.dashboard = DashboardPage::new();
                self.dashboard.mount(&self.backend);
            }
            Screen::Employees => {
                self.employees = EmployeesPage::new();
                self.employees.mount(&self.backend);
            }
            Screen::Attendance => {
                self.attendance = AttendancePage::new();
                self.attendance.mount(&self.backend);
            }
        }
    }
}

impl eframe::App for HrmsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut selected = self.screen;

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(SECTION_SPACING);
                ui.heading("HRMS Lite");
                ui.add_space(SECTION_SPACING);
                ui.selectable_value(&mut selected, Screen::Dashboard, "Dashboard");
                ui.selectable_value(&mut selected, Screen::Employees, "Employees");
                ui.selectable_value(&mut selected, Screen::Attendance, "Attendance");
            });
        self.switch_to(selected);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(ITEM_SPACING);
                    match self.screen {
                        Screen::Dashboard => self.dashboard.ui(ui, &self.backend),
                        Screen::Employees => self.employees.ui(ui, &self.backend),
                        Screen::Attendance => self.attendance.ui(ui, &self.backend),
                    }
                });
        });
    }
}

pub fn run_gui(config: AppConfig, runtime: tokio::runtime::Handle) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                f32::from(config.window_width),
                f32::from(config.window_height),
            ])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("HRMS Lite"),
        ..Default::default()
    };

    eframe::run_native(
        "HRMS Lite",
        options,
        Box::new(move |cc| Ok(Box::new(HrmsApp::new(cc, &config, runtime)))),
    )
    .map_err(|err| anyhow!("Failed to launch egui front-end: {err}"))
}
