// tests/stats_summary.rs
use defcon_courses::course::CourseRecord;
use defcon_courses::stats::{format_currency, parse_cost, Stats};

fn costed(cost: Option<&str>, dates: Option<&str>) -> CourseRecord {
    CourseRecord {
        cost: cost.map(Into::into),
        dates: dates.map(Into::into),
        ..Default::default()
    }
}

#[test]
fn average_skips_unparseable_costs() {
    let list = vec![
        costed(Some("$100"), None),
        costed(Some("$250"), None),
        costed(Some("N/A"), None),
    ];
    let s = Stats::compute(&list);
    assert_eq!(s.total, 3);
    assert_eq!(s.average_cost, 175);
    assert_eq!(s.average_cost_label(), "$175");
}

#[test]
fn average_rounds_and_groups_thousands() {
    let list = vec![
        costed(Some("$4,500"), None),
        costed(Some("4600.75"), None),
        costed(None, None),
    ];
    // (4500 + 4600.75) / 2 = 4550.375
    assert_eq!(Stats::compute(&list).average_cost_label(), "$4,550");

    let halves = vec![costed(Some("1"), None), costed(Some("2"), None)];
    assert_eq!(Stats::compute(&halves).average_cost, 2);
}

#[test]
fn no_parseable_cost_is_zero() {
    let list = vec![costed(Some("TBD"), None), costed(Some("1.2.3"), None), costed(None, None)];
    assert_eq!(Stats::compute(&list).average_cost_label(), "$0");
    assert_eq!(Stats::compute(&[]).average_cost_label(), "$0");
}

#[test]
fn parse_cost_strips_everything_but_digits_and_dot() {
    assert_eq!(parse_cost("$1,200.50 USD"), Some(1200.5));
    assert_eq!(parse_cost("N/A"), None);
    assert_eq!(parse_cost("."), None);
    assert_eq!(parse_cost(""), None);
}

#[test]
fn currency_grouping() {
    assert_eq!(format_currency(0), "$0");
    assert_eq!(format_currency(999), "$999");
    assert_eq!(format_currency(1000), "$1,000");
    assert_eq!(format_currency(1234567), "$1,234,567");
}

#[test]
fn date_range_is_first_distinct_value() {
    let list = vec![
        costed(None, None),
        costed(None, Some("Aug 11-12")),
        costed(None, Some("Aug 9-10")),
        costed(None, Some("Aug 11-12")),
    ];
    assert_eq!(Stats::compute(&list).date_range, "Aug 11-12");
}

#[test]
fn date_range_without_dates_is_placeholder() {
    let list = vec![costed(Some("$1"), None), costed(None, Some(""))];
    assert_eq!(Stats::compute(&list).date_range, "N/A");
}
