// End-to-end runs of file mode and interactive mode over in-memory input.
use chrono::{NaiveDate, TimeZone, Utc};
use quickics::error::ParseError;
use quickics::model::ParseSettings;
use quickics::session::Session;
use std::io::Cursor;

fn session() -> Session {
    // 2024-03-07 12:00 in New York
    Session::new(ParseSettings::default()).at(Utc.with_ymd_and_hms(2024, 3, 7, 17, 0, 0).unwrap())
}

fn run_file(input: &str) -> (anyhow::Result<quickics::model::EventBook>, String) {
    let mut out = Vec::new();
    let result = session().collect_from_reader(Cursor::new(input.to_string()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_file_mode_collects_valid_lines() {
    let (result, out) = run_file(
        "today\n\
         9:00am 9:30am Stand-up\n\
         3:00pm 4:00pm   Team    Meeting  \n",
    );
    let book = result.unwrap();

    assert_eq!(book.len(), 2);
    let names: Vec<&str> = book.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Stand-up", "Team Meeting"]);

    assert!(out.starts_with("Using date 03-07-2024\n"));
    assert!(out.contains("Added event: 9:00am 9:30am Stand-up\n"));
    // Lines are echoed after trimming the ends.
    assert!(out.contains("Added event: 3:00pm 4:00pm   Team    Meeting\n"));
}

#[test]
fn test_file_mode_blank_lines_are_reported() {
    let (result, out) = run_file("03-07-2024\n3:00pm 4:00pm A\n\n   \n4:00pm 5:00pm B\n");
    let book = result.unwrap();

    assert_eq!(book.len(), 2);
    assert_eq!(out.matches("Invalid input . Event not added.").count(), 2);
}

#[test]
fn test_file_mode_bad_lines_are_skipped() {
    let (result, out) = run_file("tomorrow\n3pm 4pm Nap\n10:00am 11:00am Review\n15:00 16:00 Gym\n");
    let book = result.unwrap();

    assert_eq!(book.len(), 1);
    let event = book.iter().next().unwrap();
    assert_eq!(event.begin.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
    assert!(out.contains("Invalid input 3pm 4pm Nap. Event not added."));
    assert!(out.contains("Invalid input 15:00 16:00 Gym. Event not added."));
}

#[test]
fn test_file_mode_survives_badly_encoded_line() {
    let input = b"today\n9:00am 10:00am Review\n3:00pm 4:00pm Caf\xE9\nbad\xFF\n5:00pm 6:00pm Gym\n";
    let mut out = Vec::new();
    let book = session()
        .collect_from_reader(Cursor::new(input.to_vec()), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    let names: Vec<&str> = book.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Review", "Caf\u{FFFD}", "Gym"]);
    assert!(out.contains("Invalid input bad\u{FFFD}. Event not added."));
    assert!(out.contains("Added event: 5:00pm 6:00pm Gym"));
}

#[test]
fn test_interactive_survives_badly_encoded_line() {
    let mut input = Cursor::new(b"today\nnot \xFF a time\n5:00pm 6:00pm Gym\n\n".to_vec());
    let mut out = Vec::new();
    let book = session().collect_interactive(&mut input, &mut out).unwrap();

    assert_eq!(book.len(), 1);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid input not \u{FFFD} a time. Event not added."));
}

#[test]
fn test_file_mode_bad_date_is_fatal() {
    let (result, out) = run_file("13-45-2024\n3:00pm 4:00pm Team Meeting\n");
    let err = result.unwrap_err();

    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::InvalidDateFormat("13-45-2024".to_string()))
    );
    assert!(out.is_empty(), "nothing should be processed: {:?}", out);
}

#[test]
fn test_file_mode_empty_file_is_fatal() {
    let (result, _) = run_file("");
    assert!(matches!(
        result.unwrap_err().downcast_ref::<ParseError>(),
        Some(ParseError::InvalidDateFormat(_))
    ));
}

#[test]
fn test_interactive_reprompts_until_valid_date() {
    let mut input = Cursor::new("02-30-2024\nsoon\n03-07-2024\n3:00pm 4:00pm Team Meeting\n\n");
    let mut out = Vec::new();
    let book = session().collect_interactive(&mut input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(book.len(), 1);
    assert!(out.contains("Invalid date 02-30-2024. Try again."));
    assert!(out.contains("Invalid date soon. Try again."));
    assert_eq!(out.matches("Enter the date").count(), 3);
    assert!(out.contains("Using date 03-07-2024"));
    assert!(out.contains("Added event: 3:00pm 4:00pm Team Meeting"));
}

#[test]
fn test_interactive_stops_at_blank_line() {
    let mut input = Cursor::new("today\n9:00am 10:00am One\n\n11:00am 12:00pm Never read\n");
    let mut out = Vec::new();
    let book = session().collect_interactive(&mut input, &mut out).unwrap();

    assert_eq!(book.len(), 1);
    let out = String::from_utf8(out).unwrap();
    assert!(!out.contains("Never read"));
}

#[test]
fn test_interactive_whitespace_line_is_not_the_sentinel() {
    let mut input = Cursor::new("today\n  \n9:00am 10:00am One\n");
    let mut out = Vec::new();
    let book = session().collect_interactive(&mut input, &mut out).unwrap();

    // End of input ends the event loop like a blank line.
    assert_eq!(book.len(), 1);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid input   . Event not added."));
}

#[test]
fn test_interactive_end_of_input_before_date() {
    let mut input = Cursor::new("nope\n");
    let mut out = Vec::new();
    let err = session().collect_interactive(&mut input, &mut out).unwrap_err();
    assert!(err.to_string().contains("before a valid date"));
}
