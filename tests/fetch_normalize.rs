// tests/fetch_normalize.rs
//
// Reply → records / FetchError, without any network.
//
use defcon_courses::core::net::HttpReply;
use defcon_courses::error::FetchError;
use defcon_courses::fetch::normalize;

#[test]
fn success_with_courses_keeps_order_and_fields() {
    let body = r#"{"courses":[
        {"name":"SEC560","cost":"$1,200"},
        {"name":"Intro","trainers":"Alice","difficulty":"Beginner","extra":"ignored"}
    ]}"#;
    let recs = normalize(&HttpReply::new(200, body)).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].name.as_deref(), Some("SEC560"));
    assert_eq!(recs[0].cost.as_deref(), Some("$1,200"));
    assert_eq!(recs[0].trainers, None);
    assert_eq!(recs[1].trainers.as_deref(), Some("Alice"));
}

#[test]
fn success_with_empty_or_missing_courses_is_no_courses_found() {
    for body in [r#"{"courses":[]}"#, r#"{}"#, r#"{"courses":null}"#] {
        let err = normalize(&HttpReply::new(200, body)).unwrap_err();
        assert!(matches!(err, FetchError::NoCoursesFound), "body {body}");
        assert_eq!(err.to_string(), "No courses found.");
    }
}

#[test]
fn failure_with_error_message_surfaces_it() {
    let body = r#"{"error":"No courses found or error occurred during scraping."}"#;
    let err = normalize(&HttpReply::new(500, body)).unwrap_err();
    assert!(matches!(err, FetchError::Server(_)));
    assert_eq!(err.to_string(), "No courses found or error occurred during scraping.");
}

#[test]
fn failure_without_message_is_generic() {
    for body in [r#"{}"#, r#"{"error":""}"#, r#"{"error":null}"#] {
        let err = normalize(&HttpReply::new(502, body)).unwrap_err();
        assert!(matches!(err, FetchError::FetchFailed { .. }), "body {body}");
        assert_eq!(err.to_string(), "Failed to fetch course data.");
    }
}

#[test]
fn non_json_body_is_fetch_failed_regardless_of_status() {
    for status in [200, 404, 500] {
        let err = normalize(&HttpReply::new(status, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, FetchError::FetchFailed { .. }));
    }
}

#[test]
fn non_success_ignores_courses_field() {
    let body = r#"{"courses":[{"name":"X"}]}"#;
    let err = normalize(&HttpReply::new(503, body)).unwrap_err();
    assert!(matches!(err, FetchError::FetchFailed { .. }));
}
