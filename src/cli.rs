// src/cli.rs
use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{consts::CSV_FILE_NAME, state::AppState},
    controller::CourseController,
    course::Field,
    fetch::HttpSource,
    log::{self, LogTarget},
    progress::Progress,
    render,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Fetch DEF CON training courses and export them as CSV")]
pub struct Args {
    /// Backend base URL (default: $COURSES_API_URL or http://127.0.0.1:5000)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output file or directory for the CSV export
    #[arg(short, long)]
    pub out: Option<String>,

    /// Also write the table body as an HTML fragment
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Print the table and stats only; skip the CSV file
    #[arg(long)]
    pub no_export: bool,

    /// No progress lines on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn percent(&mut self, pct: u8) {
        if !self.quiet { eprintln!("[{pct:>3}%]"); }
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    log::init(LogTarget::Stderr).wrap_err("logging setup failed")?;

    let mut state = AppState::from_env();
    if let Some(url) = &args.url {
        state.options.fetch.base_url = url.clone();
    }
    if let Some(out) = &args.out {
        state.options.export.set_path(out);
    }

    let source = HttpSource::new(&state.options.fetch)?;
    let mut controller = CourseController::new();
    let mut prog = CliProgress { quiet: args.quiet };

    controller.scrape_all_courses(&source, Some(&mut prog))?;

    print_table(&controller);
    if let Some(stats) = controller.stats() {
        println!();
        println!("Total Courses: {}", stats.total);
        println!("Average Cost:  {}", stats.average_cost_label());
        println!("Date Range:    {}", stats.date_range);
    }

    if let Some(path) = &args.html {
        fs::write(path, render::to_html(controller.rows()))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    if !args.no_export {
        match controller.export_to_csv(&state.options.export)? {
            Some(path) => println!("Wrote {}", path.display()),
            None => println!("Nothing to export ({CSV_FILE_NAME} not written)"),
        }
    }
    Ok(())
}

fn print_table(controller: &CourseController) {
    let headers: Vec<&str> = Field::ALL.iter().map(|f| f.header()).collect();
    println!("{}", headers.join(" | "));
    for row in controller.rows() {
        println!("{} [{}]", row.cells.join(" | "), row.difficulty.css_class());
    }
}
