use eframe::{App, Frame, CreationContext, egui};
use egui::{Ui, ScrollArea, RichText, Color32, Layout, Align};
use egui_extras::{Column, TableBuilder};
use log::info;

mod charts;
mod config;
mod input;
mod ledger;
mod models;
mod views;
use config::AppConfig;
use input::LogForm;
use ledger::Session;
use views::Metric;

fn main() -> Result<(), eframe::Error> {
    pretty_env_logger::init();
    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    info!("starting Gym Progress Tracker");
    eframe::run_native(
        "Gym Progress Tracker",
        options,
        Box::new(|cc| Ok(Box::new(GymTrackerApp::new(cc, config)))),
    )
}

struct GymTrackerApp {
    session: Session,
    form: LogForm,
    tab: Tab,
    flash: Option<Flash>,
}

#[derive(PartialEq, Clone, Copy)]
enum Tab {
    LogEntry,
    ViewLogs,
    ProgressGraphs,
}

enum Flash {
    Success(String),
    Error(String),
}

impl GymTrackerApp {
    fn new(_cc: &CreationContext, config: AppConfig) -> Self {
        GymTrackerApp {
            session: Session::new(),
            form: LogForm::new(config.defaults, config.minimums),
            tab: Tab::LogEntry,
            flash: None,
        }
    }

    fn submit_form(&mut self) {
        self.flash = Some(match self.form.submit() {
            Ok(entry) => {
                let record = self.session.ledger_mut().append(entry);
                info!(
                    "logged {} ({} x {} @ {:.1} kg, volume {:.1})",
                    record.exercise, record.sets, record.reps, record.weight_lifted, record.volume
                );
                Flash::Success("Gym log added successfully!".to_string())
            }
            Err(err) => Flash::Error(err.to_string()),
        });
    }

    fn reset_session(&mut self) {
        self.session.restart();
        self.form.clear();
        self.flash = None;
    }
}

impl App for GymTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.heading(RichText::new("Gym Progress Tracker").size(32.0).strong());
                ui.label(
                    "Record your gym workouts by tracking the exercise, time spent at the gym, \
                     sets, reps, weight lifted, and your body weight.",
                );
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    for (tab, label) in [
                        (Tab::LogEntry, "Log Entry"),
                        (Tab::ViewLogs, "View Logs"),
                        (Tab::ProgressGraphs, "Progress Graphs"),
                    ] {
                        if ui.selectable_label(self.tab == tab, label).clicked() {
                            self.tab = tab;
                        }
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("New session").clicked() {
                            self.reset_session();
                        }
                        ui.weak(format!(
                            "Session started {}",
                            self.session.started_at().format("%H:%M:%S")
                        ));
                    });
                });
                ui.separator();

                match self.tab {
                    Tab::LogEntry => self.show_log_entry(ui),
                    Tab::ViewLogs => self.show_logs(ui),
                    Tab::ProgressGraphs => self.show_progress(ui),
                }
            });
        });
    }
}

impl GymTrackerApp {
    fn show_log_entry(&mut self, ui: &mut Ui) {
        ui.heading("Add a New Gym Log");
        ui.add_space(10.0);

        egui::Grid::new("log_form")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                let form = &mut self.form;
                for (label, value) in [
                    ("Exercise Name:", &mut form.exercise),
                    ("Time Spent (minutes):", &mut form.time_spent),
                    ("Sets:", &mut form.sets),
                    ("Reps per Set:", &mut form.reps),
                    ("Weight Lifted (in kg):", &mut form.weight_lifted),
                    ("Your Body Weight (in kg):", &mut form.body_weight),
                ] {
                    ui.label(label);
                    ui.text_edit_singleline(value);
                    ui.end_row();
                }
            });

        ui.add_space(10.0);
        if ui.button("Add Log").clicked() {
            self.submit_form();
        }

        match &self.flash {
            Some(Flash::Success(msg)) => {
                ui.label(RichText::new(msg).color(Color32::from_rgb(40, 160, 70)));
            }
            Some(Flash::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    }

    fn show_logs(&mut self, ui: &mut Ui) {
        ui.heading("Your Gym Logs");
        ui.add_space(10.0);

        let ledger = self.session.ledger();
        if ledger.is_empty() {
            ui.label("No logs recorded yet.");
        } else {
            let rows = views::table_rows(ledger);
            ScrollArea::horizontal().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .max_scroll_height(400.0)
                    .cell_layout(Layout::left_to_right(Align::Center))
                    .columns(Column::auto().at_least(80.0), views::TABLE_COLUMNS.len())
                    .header(22.0, |mut header| {
                        for title in views::TABLE_COLUMNS {
                            header.col(|ui| {
                                ui.strong(title);
                            });
                        }
                    })
                    .body(|mut body| {
                        for record in rows {
                            body.row(20.0, |mut row| {
                                for cell in views::table_cells(record) {
                                    row.col(|ui| {
                                        ui.label(cell);
                                    });
                                }
                            });
                        }
                    });
            });
        }

        ui.add_space(10.0);
        ui.label(ledger.summary());
    }

    fn show_progress(&mut self, ui: &mut Ui) {
        ui.heading("Progress Graphs");
        ui.add_space(10.0);

        let ledger = self.session.ledger();
        if ledger.is_empty() {
            ui.label("No logs to display progress.");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for metric in Metric::ALL {
                ui.label(RichText::new(metric.title()).size(20.0).strong());
                let points = views::series(ledger, metric);
                charts::line_chart(ui, metric.title(), &points, metric_color(metric));
                ui.add_space(16.0);
            }
        });
    }
}

fn metric_color(metric: Metric) -> Color32 {
    match metric {
        Metric::BodyWeight => Color32::from_rgb(70, 130, 220),
        Metric::Volume => Color32::from_rgb(220, 120, 50),
        Metric::TimeSpent => Color32::from_rgb(60, 170, 110),
    }
}
