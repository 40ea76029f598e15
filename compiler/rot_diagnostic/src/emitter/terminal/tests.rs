use pretty_assertions::assert_eq;
use rot_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(source: &str, diagnostic: &Diagnostic) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
        .with_source(source.as_bytes())
        .with_file_path("main.rot");
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

fn invalid_char_at(span: Span, line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("invalid character")
        .with_location(span, line)
        .with_advice("remove this character")
}

#[test]
fn renders_header_snippet_and_advice() {
    let text = render("x = 1\ny = $\n", &invalid_char_at(Span::new(10, 11), 2));
    assert_eq!(
        text,
        concat!(
            "> main.rot:2:5: error[E0002]: invalid character\n",
            " 2 | y = $\n",
            "   |     ^\n",
            "> Advice: remove this character\n",
            "\n",
        )
    );
}

#[test]
fn caret_run_matches_span_length() {
    let text = render("let name = \"abc", &invalid_char_at(Span::new(11, 15), 1));
    assert!(text.contains(&format!("\n   | {}^^^^\n", " ".repeat(11))), "{text}");
    assert!(text.starts_with("> main.rot:1:12:"), "{text}");
}

#[test]
fn zero_length_span_gets_one_caret() {
    let text = render("/* open", &invalid_char_at(Span::point(7), 1));
    assert!(text.starts_with("> main.rot:1:8:"), "{text}");
    assert!(text.contains(&format!("\n   | {}^\n", " ".repeat(7))), "{text}");
}

#[test]
fn long_span_is_truncated() {
    let source = format!("\"{}", "s".repeat(200));
    let text = render(&source, &invalid_char_at(Span::new(0, 201), 1));
    assert!(text.contains(&format!("   | {TRUNCATED_UNDERLINE}\n")), "{text}");
    assert!(!text.contains("^^^^"));
}

#[test]
fn span_of_exactly_max_is_not_truncated() {
    let source = "a".repeat(100);
    let text = render(&source, &invalid_char_at(Span::new(0, 100), 1));
    assert!(text.contains(&"^".repeat(100)));
    assert!(!text.contains(TRUNCATED_UNDERLINE));
}

#[test]
fn gutter_widens_with_line_number() {
    let source = "\n".repeat(11) + "bad\tline";
    let text = render(&source, &invalid_char_at(Span::new(14, 15), 12));
    assert!(text.contains("\n 12 | bad\tline\n"), "{text}");
    assert!(text.contains("\n    |    ^\n"), "{text}");
}

#[test]
fn tabs_before_the_column_are_echoed() {
    let source = "\"\t\" $";
    let text = render(source, &invalid_char_at(Span::new(4, 5), 1));
    assert!(text.contains("\n   |  \t  ^\n"), "{text}");
}

#[test]
fn diagnostic_without_location_has_no_snippet() {
    let diag = Diagnostic::error(ErrorCode::E0011)
        .with_message("file is empty")
        .with_advice("add some code to the file");
    let text = render("", &diag);
    assert_eq!(
        text,
        "> main.rot: error[E0011]: file is empty\n> Advice: add some code to the file\n\n"
    );
}

#[test]
fn notes_are_listed() {
    let diag = invalid_char_at(Span::new(0, 1), 1).with_note("only ASCII is allowed");
    let text = render("$", &diag);
    assert!(text.contains("  = note: only ASCII is allowed\n"), "{text}");
}

#[test]
fn emit_all_renders_each() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
        .with_source(b"$ $");
    emitter.emit_all(&[
        invalid_char_at(Span::new(0, 1), 1),
        invalid_char_at(Span::new(2, 3), 1),
    ]);
    emitter.flush();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("<input>:1:1:"));
    assert!(text.contains("<input>:1:3:"));
}

// --- Summary Tests ---

fn summary(errors: usize, warnings: usize) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_emit_summary_single_error() {
    assert_eq!(summary(1, 0), "error: aborting due to previous error\n");
}

#[test]
fn test_emit_summary_errors_and_warnings() {
    assert_eq!(
        summary(2, 1),
        "error: aborting due to 2 previous errors; 1 warning emitted\n"
    );
}

#[test]
fn test_emit_summary_warnings_only() {
    assert_eq!(summary(0, 3), "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_nothing() {
    assert_eq!(summary(0, 0), "");
}

// --- ColorMode Tests ---

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_always_mode_emits_ansi() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false)
        .with_source(b"$");
    emitter.emit(&invalid_char_at(Span::new(0, 1), 1));
    emitter.flush();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("\x1b[1;31m^\x1b[0m"));
}

#[test]
fn test_never_mode_is_plain() {
    let text = render("$", &invalid_char_at(Span::new(0, 1), 1));
    assert!(!text.contains("\x1b["));
}
