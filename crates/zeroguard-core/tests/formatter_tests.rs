use serde_json::json;
use zeroguard_core::{
    terminal::style_escape, Formatter, MemorySink, Severity, Stream, ZeroGuardError,
};

const REPORT_TEMPLATE: &str = "
    Example template:
    {% for item in range(2) %}
        {t.blue} {{item}} {{value}}
    {% endfor %}
    ";

/// Helper function to create a formatter capturing plain output
fn create_plain_formatter() -> (Formatter, MemorySink) {
    let sink = MemorySink::new();
    let fmt = Formatter::builder().colored(false).sink(sink.clone()).build();
    (fmt, sink)
}

#[test]
fn test_complete_session_without_color() {
    let (mut fmt, sink) = create_plain_formatter();
    let data = json!({"value": "Some value"});

    fmt.info("msg info {t.blue}{t.underline} blue underline{t.normal}", None).expect("info");
    fmt.warn("msg warn {t.red}{t.bold}red bold{t.normal}", None).expect("warn");
    fmt.err(REPORT_TEMPLATE, Some(&data)).expect("err");
    fmt.ok("msg ok", None).expect("ok");
    fmt.data("msg data", None).expect("data");

    {
        let mut list = fmt.begin_item_list(1);
        list.data("inside itemlist", None).expect("data");
        list.ok("inside itemlist", None).expect("ok");
    }
    fmt.data("outside itemlist", None).expect("data");

    {
        let mut list = fmt.begin_numbered_list(2);
        list.data("inside numlist", None).expect("data");
        list.ok("inside numlist", None).expect("ok");
    }
    fmt.write("outside numlist", 0).expect("write");

    let texts = sink.texts();
    assert_eq!(texts[0], "---(i) INFO: msg info  blue underline");
    assert_eq!(texts[1], "---(!) WARN: msg warn red bold");
    assert!(texts[2].starts_with("---(X) ERR: \n    Example template:"));
    assert!(texts[2].contains("  0 Some value"));
    assert!(texts[2].contains("  1 Some value"));
    assert_eq!(
        &texts[3..],
        &[
            "---(+) OK: msg ok",
            "msg data",
            "   * inside itemlist",
            "   * ---(+) OK: inside itemlist",
            "outside itemlist",
            "     1. inside numlist",
            "     2. ---(+) OK: inside numlist",
            "outside numlist",
        ]
    );
    assert!(sink.lines().iter().all(|line| line.stream == Stream::Stderr));
}

#[test]
fn test_forced_color_to_stdout() {
    let sink = MemorySink::new();
    let mut fmt = Formatter::builder()
        .stream(Stream::Stdout)
        .force_colored(true)
        .sink(sink.clone())
        .build();

    fmt.ok("msg ok", None).expect("ok");

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].stream, Stream::Stdout);
    assert_eq!(
        lines[0].text,
        format!(
            "{}---(+) OK: msg ok{}",
            style_escape("green").unwrap(),
            style_escape("normal").unwrap()
        )
    );
}

#[test]
fn test_error_only_verbosity() {
    let (mut fmt, sink) = create_plain_formatter();
    fmt.set_min_severity(Severity::Err);

    fmt.info("i", None).expect("info");
    fmt.ok("o", None).expect("ok");
    fmt.warn("w", None).expect("warn");
    fmt.err("e", None).expect("err");
    fmt.data("d", None).expect("data");

    assert_eq!(sink.texts(), vec!["---(X) ERR: e", "d"]);
}

#[test]
fn test_render_errors_surface_to_caller() {
    let (mut fmt, sink) = create_plain_formatter();

    let result = fmt.err(REPORT_TEMPLATE, None);
    assert!(matches!(result, Err(ZeroGuardError::TemplateRender { .. })));

    fmt.set_colored(true);
    let result = fmt.info("{t.chartreuse}x", None);
    assert!(matches!(
        result,
        Err(ZeroGuardError::UnknownStyleToken { .. })
    ));

    assert!(sink.lines().is_empty());
}
