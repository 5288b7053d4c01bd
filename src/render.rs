// src/render.rs
//
// Renderer: projects the course list into display rows. Rows are always
// rebuilt from scratch; nothing is patched in place.

use std::fmt::Write as _;

use crate::{
    config::consts::PLACEHOLDER,
    course::{CourseList, CourseRecord, Difficulty, Field},
};

/// One table row: the seven cells as shown, plus the difficulty bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 7],
    pub difficulty: Difficulty,
}

impl TableRow {
    pub fn project(course: &CourseRecord) -> Self {
        let cells = Field::ALL.map(|f| s!(course.get(f).unwrap_or(PLACEHOLDER)));
        Self { cells, difficulty: course.difficulty_category() }
    }

    pub fn cell(&self, field: Field) -> &str {
        let ix = Field::ALL.iter().position(|&f| f == field).unwrap_or(0);
        &self.cells[ix]
    }
}

/// Rows in list order.
pub fn rows(courses: &CourseList) -> Vec<TableRow> {
    courses.iter().map(TableRow::project).collect()
}

/// Style class attached to a column's cells, if any.
pub fn cell_class(field: Field) -> Option<&'static str> {
    match field {
        Field::Name     => Some("course-name"),
        Field::Trainers => Some("trainer"),
        Field::Cost     => Some("cost"),
        _ => None,
    }
}

/// `<tr>` fragment for a table body, one row per line.
/// The difficulty cell is wrapped in `<span class="difficulty <category>">`.
pub fn to_html(rows: &[TableRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("<tr>");
        for (field, text) in Field::ALL.iter().zip(row.cells.iter()) {
            let text = escape_html(text);
            match (field, cell_class(*field)) {
                (Field::Difficulty, _) => {
                    let _ = write!(
                        out,
                        "<td><span class=\"difficulty {}\">{}</span></td>",
                        row.difficulty.css_class(),
                        text
                    );
                }
                (_, Some(class)) => { let _ = write!(out, "<td class=\"{class}\">{text}</td>"); }
                (_, None)        => { let _ = write!(out, "<td>{text}</td>"); }
            }
        }
        out.push_str("</tr>\n");
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
