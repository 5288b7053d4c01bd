// src/csv.rs
use std::io::{self, Write};

use crate::course::{CourseRecord, Field};

pub const SEP: char = ',';

/* ---------------- Writing ---------------- */

/// Header line: the fixed column titles, unquoted.
pub fn write_header<W: Write>(mut w: W) -> io::Result<()> {
    let mut first = true;
    for field in Field::ALL {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        write!(w, "{}", field.header())?;
    }
    Ok(())
}

/// One record. Every cell is wrapped in double quotes and missing fields are
/// written as `""`. Embedded quotes, commas and newlines are written as-is,
/// so such values do not survive a CSV reader intact.
pub fn write_record<W: Write>(mut w: W, course: &CourseRecord) -> io::Result<()> {
    let mut first = true;
    for field in Field::ALL {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        write!(w, "\"{}\"", course.get(field).unwrap_or(""))?;
    }
    Ok(())
}

/// Full document: header, then one line per record, joined by '\n'
/// with no trailing newline.
pub fn to_export_string(courses: &[CourseRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_header(&mut buf);
    for course in courses {
        buf.push(b'\n');
        let _ = write_record(&mut buf, course);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
