// src/controller.rs
//
// Course Display Controller. Owns the course list and derives every view
// (rows, stats, region visibility, export enablement) from it.
//
// The fetch is split in two so the GUI can run the request off the UI thread:
//   begin_fetch()  → loading state, list cleared
//   finish_fetch() → list replaced, or error shown
// `scrape_all_courses` chains both for synchronous callers (CLI, tests).

use std::path::PathBuf;

use crate::{
    config::{consts::LOADING_TEXT, options::ExportOptions},
    course::{CourseList, CourseRecord},
    csv,
    error::{ExportError, FetchError},
    fetch::{self, CourseSource},
    file,
    progress::Progress,
    render::{self, TableRow},
    stats::Stats,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Holds the user-facing message.
    Failed(String),
}

/// Visibility and enablement of every UI region at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Views {
    pub loading: bool,
    /// Banner text, already prefixed with "Error: ".
    pub error: Option<String>,
    pub table: bool,
    pub stats: bool,
    pub export_enabled: bool,
    pub progress_pct: u8,
    pub loading_text: String,
}

#[derive(Debug, Default)]
pub struct CourseController {
    courses: CourseList,
    phase: Phase,

    // derived from `courses`; rebuilt by display_courses / display_stats
    rows: Vec<TableRow>,
    stats: Option<Stats>,

    progress_pct: u8,
    loading_text: String,
}

impl CourseController {
    pub fn new() -> Self { Self::default() }

    /* ---------- read access ---------- */

    pub fn courses(&self) -> &CourseList { &self.courses }
    pub fn phase(&self) -> &Phase { &self.phase }
    pub fn rows(&self) -> &[TableRow] { &self.rows }
    pub fn stats(&self) -> Option<&Stats> { self.stats.as_ref() }

    #[inline]
    fn has_data(&self) -> bool {
        self.phase == Phase::Loaded && !self.courses.is_empty()
    }

    pub fn views(&self) -> Views {
        let data = self.has_data();
        Views {
            loading: self.phase == Phase::Loading,
            error: match &self.phase {
                Phase::Failed(msg) => Some(format!("Error: {msg}")),
                _ => None,
            },
            table: data,
            stats: data,
            export_enabled: data,
            progress_pct: self.progress_pct,
            loading_text: self.loading_text.clone(),
        }
    }

    /* ---------- fetch ---------- */

    /// Enter the loading state. Clears the list and everything derived from it.
    pub fn begin_fetch(&mut self) {
        self.phase = Phase::Loading;
        self.progress_pct = 0;
        self.loading_text = s!(LOADING_TEXT);
        self.reset_data();
    }

    /// Apply the outcome of the request. On success the list is swapped in
    /// whole and both views are rebuilt; on failure the list stays empty.
    pub fn finish_fetch(
        &mut self,
        result: Result<Vec<CourseRecord>, FetchError>,
    ) -> Result<usize, FetchError> {
        let records = match result {
            Ok(records) if records.is_empty() => Err(FetchError::NoCoursesFound),
            other => other,
        };

        match records {
            Ok(records) => {
                let n = records.len();
                self.courses.replace(records);
                self.progress_pct = 100;
                self.loading_text = format!("Found {n} courses. Displaying...");
                self.display_courses();
                self.display_stats();
                self.phase = Phase::Loaded;
                logf!("Fetch: OK courses={}", n);
                Ok(n)
            }
            Err(e) => {
                match &e {
                    FetchError::FetchFailed { detail } => loge!("Fetch: Error: {} ({})", e, detail),
                    _ => loge!("Fetch: Error: {}", e),
                }
                self.reset_data();
                self.phase = Phase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Begin, perform the one request, finish.
    pub fn scrape_all_courses(
        &mut self,
        source: &dyn CourseSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<usize, FetchError> {
        self.begin_fetch();
        logf!("Fetch: Begin source={}", source.describe());

        if let Some(p) = progress.as_deref_mut() {
            p.begin();
            p.percent(0);
            p.log(LOADING_TEXT);
        }

        let res = self.finish_fetch(fetch::fetch_courses(source));

        if let Some(p) = progress.as_deref_mut() {
            match &res {
                Ok(_) => {
                    p.percent(self.progress_pct);
                    p.log(&self.loading_text);
                }
                Err(e) => p.log(&format!("Error: {e}")),
            }
            p.finish();
        }
        res
    }

    /* ---------- views ---------- */

    /// Rebuild all table rows from the list.
    pub fn display_courses(&mut self) {
        self.rows = render::rows(&self.courses);
    }

    pub fn display_stats(&mut self) {
        self.stats = Some(Stats::compute(self.courses.as_slice()));
    }

    /* ---------- export ---------- */

    /// CSV text for the current list, or None when the list is empty.
    pub fn csv_text(&self) -> Option<String> {
        if self.courses.is_empty() {
            return None;
        }
        Some(csv::to_export_string(self.courses.as_slice()))
    }

    /// Save the CSV. `Ok(None)` means there was nothing to export.
    pub fn export_to_csv(&self, export: &ExportOptions) -> Result<Option<PathBuf>, ExportError> {
        if self.courses.is_empty() {
            logd!("Export: Nothing to export");
            return Ok(None);
        }
        let written = file::write_export(export, self.courses.as_slice())?;
        if let Some(p) = &written {
            logf!("Export: OK rows={} path={}", self.courses.len(), p.display());
        }
        Ok(written)
    }

    /* ---------- clear ---------- */

    /// Drop all data and hide the table, stats and error. Idempotent.
    /// An in-flight fetch keeps its loading indicator.
    pub fn clear_data(&mut self) {
        self.reset_data();
        if self.phase != Phase::Loading {
            self.phase = Phase::Idle;
        }
        logd!("Clear: done (phase={:?})", self.phase);
    }

    fn reset_data(&mut self) {
        self.courses.clear();
        self.rows.clear();
        self.stats = None;
    }
}
