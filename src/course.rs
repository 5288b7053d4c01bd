// src/course.rs
//
// Course records as delivered by the backend, plus the in-memory list that
// every view is derived from.

use serde::{Deserialize, Serialize};

/// One scraped training listing. Every field is optional; the backend only
/// sends what it managed to extract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: Option<String>,
    pub trainers: Option<String>,
    pub dates: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub cost: Option<String>,
    pub difficulty: Option<String>,
}

/// The seven displayable fields, in table/CSV column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Trainers,
    Dates,
    Time,
    Venue,
    Cost,
    Difficulty,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Trainers,
        Field::Dates,
        Field::Time,
        Field::Venue,
        Field::Cost,
        Field::Difficulty,
    ];

    /// Column title used by both the table and the CSV header.
    pub fn header(self) -> &'static str {
        match self {
            Field::Name       => "Course Name",
            Field::Trainers   => "Trainer(s)",
            Field::Dates      => "Dates",
            Field::Time       => "Time",
            Field::Venue      => "Venue",
            Field::Cost       => "Cost",
            Field::Difficulty => "Difficulty",
        }
    }
}

impl CourseRecord {
    /// Field value, treating an empty string the same as a missing one.
    pub fn get(&self, field: Field) -> Option<&str> {
        let v = match field {
            Field::Name       => &self.name,
            Field::Trainers   => &self.trainers,
            Field::Dates      => &self.dates,
            Field::Time       => &self.time,
            Field::Venue      => &self.venue,
            Field::Cost       => &self.cost,
            Field::Difficulty => &self.difficulty,
        };
        v.as_deref().filter(|s| !s.is_empty())
    }

    pub fn difficulty_category(&self) -> Difficulty {
        Difficulty::classify(self.get(Field::Difficulty))
    }
}

/// Presentation bucket derived from the free-text difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Case-insensitive substring match; "beginner" wins over "advanced".
    /// Anything unrecognized, including a missing value, lands in Intermediate.
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else { return Difficulty::Intermediate };
        let lower = text.to_lowercase();
        if lower.contains("beginner") {
            Difficulty::Beginner
        } else if lower.contains("advanced") {
            Difficulty::Advanced
        } else {
            Difficulty::Intermediate
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Beginner     => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced     => "advanced",
        }
    }
}

/// Ordered, wholesale-replaced list of records. Insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseList {
    records: Vec<CourseRecord>,
}

impl CourseList {
    pub fn new() -> Self { Self::default() }

    /// Swap in a complete list. There is no per-record mutation.
    pub fn replace(&mut self, records: Vec<CourseRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) { self.records.clear(); }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn as_slice(&self) -> &[CourseRecord] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> { self.records.iter() }
}

impl From<Vec<CourseRecord>> for CourseList {
    fn from(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a CourseRecord;
    type IntoIter = std::slice::Iter<'a, CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
