// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    controller::CourseController,
    course::CourseRecord,
    error::FetchError,
};

use super::{actions, components};

pub type FetchOutcome = Result<Vec<CourseRecord>, FetchError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // options + window state (UI thread only)
    pub state: AppState,

    // single source of truth for the course list and every view of it
    pub controller: CourseController,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (the fetch worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // result of the in-flight fetch, if any
    pub inbox: Option<Receiver<FetchOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: endpoint={}", state.options.fetch.endpoint());

        Self {
            state,
            controller: CourseController::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            inbox: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Hand a finished fetch back to the controller, if one arrived.
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.inbox else { return };
        match rx.try_recv() {
            Ok(outcome) => actions::scrape::complete(self, outcome),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                actions::scrape::complete(self, Err(FetchError::failed("fetch worker exited without a result")));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::status_panel::draw(ui, self);
            components::stats_panel::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
