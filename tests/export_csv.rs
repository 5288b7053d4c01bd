// tests/export_csv.rs
//
// CSV text and file output, plus ExportOptions path handling.
//
use std::fs;
use std::path::Path;

use defcon_courses::config::options::ExportOptions;
use defcon_courses::course::CourseRecord;
use defcon_courses::csv::to_export_string;
use defcon_courses::file::write_export;

const HEADER: &str = "Course Name,Trainer(s),Dates,Time,Venue,Cost,Difficulty";

fn sec560() -> CourseRecord {
    CourseRecord {
        name: Some("SEC560".into()),
        cost: Some("$1,200".into()),
        ..Default::default()
    }
}

#[test]
fn single_record_row_with_fixed_header() {
    let csv = to_export_string(&[sec560()]);
    assert_eq!(csv, format!("{HEADER}\n\"SEC560\",\"\",\"\",\"\",\"\",\"$1,200\",\"\""));
}

#[test]
fn empty_list_is_header_only_text() {
    assert_eq!(to_export_string(&[]), HEADER);
}

#[test]
fn embedded_quotes_are_not_escaped() {
    let course = CourseRecord { name: Some(r#"The "Best" Course, Vol 2"#.into()), ..Default::default() };
    let csv = to_export_string(&[course]);
    assert!(csv.ends_with(r#""The "Best" Course, Vol 2","","","","","","""#));
}

#[test]
fn write_export_creates_dirs_and_file() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("nested").join("dir");
    let mut opts = ExportOptions::default();
    opts.set_path(&format!("{}/", target.display()));

    let written = write_export(&opts, &[sec560(), CourseRecord::default()]).unwrap().unwrap();
    assert_eq!(written, target.join("defcon_courses.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[2], r#""","","","","","","""#);
}

#[test]
fn write_export_with_nothing_is_noop() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(tmp.path().join("x.csv").to_str().unwrap());

    assert_eq!(write_export(&opts, &[]).unwrap(), None);
    assert!(!tmp.path().join("x.csv").exists());
}

#[test]
fn write_export_fails_when_parent_is_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("out.csv").to_str().unwrap());
    assert!(write_export(&opts, &[sec560()]).is_err());
}

#[test]
fn default_out_path_uses_fixed_file_name() {
    let opts = ExportOptions::default();
    assert!(opts.is_default());
    assert_eq!(opts.out_path(), Path::new("out").join("defcon_courses.csv"));
}

#[test]
fn set_path_handles_file_dir_and_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();

    // explicit file keeps the user's name
    let file = tmp.path().join("mine.csv");
    opts.set_path(file.to_str().unwrap());
    assert_eq!(opts.out_path(), file);

    // existing directory gets the default file name
    opts.set_path(tmp.path().to_str().unwrap());
    assert_eq!(opts.out_path(), tmp.path().join("defcon_courses.csv"));

    // blank resets
    opts.set_path("   ");
    assert!(opts.is_default());
}
