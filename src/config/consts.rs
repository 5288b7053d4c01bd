// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const API_PATH: &str = "/api/scrape_courses";
pub const BASE_URL_ENV: &str = "COURSES_API_URL";
pub const USER_AGENT: &str = "defcon_courses/0.2";

// Messages shown to the user
pub const FETCH_FAILED_MSG: &str = "Failed to fetch course data.";
pub const NO_COURSES_MSG: &str = "No courses found.";
pub const LOADING_TEXT: &str = "Fetching course information...";

// Table
pub const PLACEHOLDER: &str = "N/A";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CSV_FILE_NAME: &str = "defcon_courses.csv";
pub const CSV_MIME: &str = "text/csv";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Window
pub const APP_TITLE: &str = "DEF CON Training Courses";
pub const WINDOW_W: u32 = 1200;
pub const WINDOW_H: u32 = 720;
