mod state;
mod ui;

use crate::config::SimulatorConfig;
use crate::error::AppError;
use crate::upload::{intake, FileCandidate, ThreadEntropy, UploadSimulator};
use eframe::{egui, App};
use state::UiState;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

pub struct ApAutomator {
    simulator: UploadSimulator,
    state: UiState,
}

impl ApAutomator {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SimulatorConfig, runtime: Handle) -> Self {
        info!(?config, "initializing AP Automator");
        let ctx = cc.egui_ctx.clone();
        let simulator = UploadSimulator::new(config, Box::new(ThreadEntropy), runtime)
            .with_notify(Arc::new(move || ctx.request_repaint()));

        Self {
            simulator,
            state: UiState::default(),
        }
    }

    pub fn pick_file(&mut self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("Invoices, receipts and emails", &intake::ACCEPTED_EXTENSIONS);
        if let Some(path) = dialog.pick_file() {
            self.start_from_path(&path);
        }
    }

    fn start_from_path(&mut self, path: &Path) {
        match intake::from_path(path) {
            Ok(candidate) => self.start(vec![candidate]),
            Err(e) => self.report(e),
        }
    }

    fn handle_dropped(&mut self, files: &[egui::DroppedFile]) {
        let first = files.iter().take(1).map(intake::from_dropped);
        match first.collect::<Result<Vec<_>, _>>() {
            Ok(candidates) => self.start(candidates),
            Err(e) => self.report(e),
        }
    }

    fn start(&mut self, candidates: Vec<FileCandidate>) {
        self.state.error_message = None;
        self.simulator.start_first(candidates);
    }

    pub fn dismiss(&mut self) {
        self.simulator.reset();
        self.state.clear();
    }

    fn report(&mut self, error: AppError) {
        warn!(error = %error, "could not read selected file");
        self.state.error_message = Some(error.to_string());
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) =
            ctx.input(|i| (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone()));
        self.state.is_dragging = hovering;

        if !dropped.is_empty() {
            self.handle_dropped(&dropped);
        }

        self.simulator.poll();
    }
}

impl App for ApAutomator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
