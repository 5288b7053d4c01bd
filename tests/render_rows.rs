// tests/render_rows.rs
use defcon_courses::course::{CourseList, CourseRecord, Difficulty, Field};
use defcon_courses::render::{self, TableRow};

fn rec(name: &str, difficulty: Option<&str>) -> CourseRecord {
    CourseRecord {
        name: Some(name.into()),
        difficulty: difficulty.map(Into::into),
        ..Default::default()
    }
}

#[test]
fn difficulty_categories() {
    assert_eq!(Difficulty::classify(Some("Beginner Level")), Difficulty::Beginner);
    assert_eq!(Difficulty::classify(Some("Very Advanced")), Difficulty::Advanced);
    assert_eq!(Difficulty::classify(Some("Intermediate")), Difficulty::Intermediate);
    assert_eq!(Difficulty::classify(None), Difficulty::Intermediate);
    assert_eq!(Difficulty::classify(Some("ADVANCED")), Difficulty::Advanced);
    assert_eq!(Difficulty::classify(Some("Expert")), Difficulty::Intermediate);
    // beginner is checked first
    assert_eq!(Difficulty::classify(Some("Beginner to Advanced")), Difficulty::Beginner);
}

#[test]
fn missing_difficulty_row_is_intermediate_but_shows_placeholder() {
    let row = TableRow::project(&rec("X", None));
    assert_eq!(row.difficulty, Difficulty::Intermediate);
    assert_eq!(row.cell(Field::Difficulty), "N/A");
}

#[test]
fn absent_and_empty_fields_render_placeholder() {
    let course = CourseRecord {
        name: Some("SEC560".into()),
        trainers: Some(String::new()),
        cost: Some("$1,200".into()),
        ..Default::default()
    };
    let row = TableRow::project(&course);
    assert_eq!(
        row.cells,
        ["SEC560", "N/A", "N/A", "N/A", "N/A", "$1,200", "N/A"].map(String::from)
    );
}

#[test]
fn rows_match_list_order() {
    let list = CourseList::from(vec![rec("b", None), rec("a", None), rec("c", None)]);
    let rows = render::rows(&list);
    let names: Vec<&str> = rows.iter().map(|r| r.cell(Field::Name)).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn html_fragment_has_classes_and_escapes() {
    let list = CourseList::from(vec![CourseRecord {
        name: Some("Hacking <Web> & APIs".into()),
        trainers: Some("Bob".into()),
        cost: Some("$900".into()),
        difficulty: Some("Beginner".into()),
        ..Default::default()
    }]);
    let html = render::to_html(&render::rows(&list));

    assert!(html.starts_with("<tr>"));
    assert!(html.contains(r#"<td class="course-name">Hacking &lt;Web&gt; &amp; APIs</td>"#));
    assert!(html.contains(r#"<td class="trainer">Bob</td>"#));
    assert!(html.contains(r#"<td class="cost">$900</td>"#));
    assert!(html.contains(r#"<td><span class="difficulty beginner">Beginner</span></td>"#));
    assert!(html.contains("<td>N/A</td>"));
    assert_eq!(html.matches("<tr>").count(), 1);
}
