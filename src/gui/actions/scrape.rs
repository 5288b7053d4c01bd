// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::consts::LOADING_TEXT,
    fetch::{self, CourseSource, HttpSource},
    gui::{app::{App, FetchOutcome}, progress::GuiProgress},
    progress::Progress,
};

/// Start a fetch on a worker thread. The controller enters the loading state
/// immediately; `complete` applies the result once it arrives.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Scrape: Clicked while a fetch is in flight; ignoring");
        return;
    }
    app.running = true;
    app.controller.begin_fetch();

    let opts = app.state.options.fetch.clone();
    logf!("Scrape: Begin url={}", opts.endpoint());

    let (tx, rx) = mpsc::channel::<FetchOutcome>();
    app.inbox = Some(rx);

    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());

    thread::spawn(move || {
        prog.begin();
        prog.log(LOADING_TEXT);

        // → This is where the request happens ←
        let outcome = HttpSource::new(&opts).and_then(|src| {
            logd!("Scrape: worker requesting {}", src.describe());
            fetch::fetch_courses(&src)
        });

        let _ = tx.send(outcome);
        prog.finish();
    });
}

pub fn complete(app: &mut App, outcome: FetchOutcome) {
    app.running = false;
    app.inbox = None;

    match app.controller.finish_fetch(outcome) {
        Ok(n) => app.status(format!("Ready: {n} courses")),
        Err(e) => app.status(format!("Error: {e}")),
    }
}
