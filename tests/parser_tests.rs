use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use toolchain_profiler::parser::{repair_and_parse, LogEntry, RepairStrategy};
use toolchain_profiler::utils::error::ParseError;

const STRATEGIES: [RepairStrategy; 2] = [RepairStrategy::PerLine, RepairStrategy::Reconstruct];

fn log_path() -> &'static Path {
    Path::new("/tmp/logs/toolchain_profiler.pid_42.json")
}

fn to_json(entries: &[LogEntry]) -> serde_json::Value {
    serde_json::to_value(entries).unwrap()
}

#[test]
fn test_single_entry_with_and_without_comma() {
    for strategy in STRATEGIES {
        for line in [
            r#"{"time": 1.5, "op": "start", "pid": 42}"#,
            r#"{"time": 1.5, "op": "start", "pid": 42},"#,
        ] {
            let entries = repair_and_parse(log_path(), line, strategy).unwrap();
            assert_eq!(
                to_json(&entries),
                json!([{"time": 1.5, "op": "start", "pid": 42}])
            );
        }
    }
}

#[test]
fn test_unterminated_array_with_stray_commas() {
    let content = "[\n\
        {\"time\": 1, \"op\": \"start\"}\n\
        ,\n\
        {\"time\": 2, \"op\": \"enterBlock\", \"name\": \"link\"},\n\
        \n\
        {\"time\": 3, \"op\": \"exitBlock\", \"name\": \"link\"}\n";

    for strategy in STRATEGIES {
        let entries = repair_and_parse(log_path(), content, strategy).unwrap();
        assert_eq!(
            to_json(&entries),
            json!([
                {"time": 1, "op": "start"},
                {"time": 2, "op": "enterBlock", "name": "link"},
                {"time": 3, "op": "exitBlock", "name": "link"}
            ])
        );
    }
}

#[test]
fn test_closed_array_is_accepted() {
    for strategy in STRATEGIES {
        let entries =
            repair_and_parse(log_path(), "[\n{\"time\": 3, \"op\": \"z\"},\n]", strategy).unwrap();
        assert_eq!(to_json(&entries), json!([{"time": 3, "op": "z"}]));
    }
}

#[test]
fn test_windows_line_endings() {
    for strategy in STRATEGIES {
        let entries =
            repair_and_parse(log_path(), "[\r\n{\"time\": 1},\r\n{\"time\": 2}\r\n", strategy)
                .unwrap();
        assert_eq!(entries.len(), 2);
    }
}

#[test]
fn test_empty_content_yields_no_entries() {
    for strategy in STRATEGIES {
        assert!(repair_and_parse(log_path(), "", strategy).unwrap().is_empty());
        assert!(repair_and_parse(log_path(), "[\n,\n\n", strategy)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_garbage_reports_path() {
    let err = repair_and_parse(log_path(), "{\"time\": 1}\n%%%", RepairStrategy::Reconstruct)
        .unwrap_err();

    assert!(matches!(err, ParseError::InvalidJson { .. }));
    let message = err.to_string();
    assert!(message.contains("toolchain_profiler.pid_42.json"));
    assert!(message.contains("line"));
}

#[test]
fn test_per_line_rejects_multi_line_entry() {
    let content = "{\"time\": 1,\n \"op\": \"start\"}";

    let err = repair_and_parse(log_path(), content, RepairStrategy::PerLine).unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 1, .. }));
}

#[test]
fn test_entry_without_time() {
    for strategy in STRATEGIES {
        let err = repair_and_parse(log_path(), "{\"time\": 1}\n{\"op\": \"exit\"}", strategy)
            .unwrap_err();

        match err {
            ParseError::MissingTime { entry, .. } => assert_eq!(entry, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_two_entries_on_one_line_only_reconstruct_accepts() {
    let content = "{\"time\": 1}, {\"time\": 2}";

    let err = repair_and_parse(log_path(), content, RepairStrategy::PerLine).unwrap_err();
    assert!(matches!(err, ParseError::InvalidLine { line: 1, .. }));

    let entries = repair_and_parse(log_path(), content, RepairStrategy::Reconstruct).unwrap();
    assert_eq!(to_json(&entries), json!([{"time": 1}, {"time": 2}]));
}

#[test]
fn test_padded_bracket_line_only_per_line_accepts() {
    // Reconstruct compares filler lines untrimmed
    let content = "[ \n{\"time\": 1}\n]";

    let entries = repair_and_parse(log_path(), content, RepairStrategy::PerLine).unwrap();
    assert_eq!(to_json(&entries), json!([{"time": 1}]));

    let err = repair_and_parse(log_path(), content, RepairStrategy::Reconstruct).unwrap_err();
    assert!(matches!(err, ParseError::InvalidJson { .. }));
}
