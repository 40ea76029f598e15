use pretty_assertions::assert_eq;

use super::*;

fn compile(args: &[&str]) -> CompileOptions {
    match parse_args(args).unwrap() {
        Command::Compile(options) => options,
        other => panic!("expected compile, got {other:?}"),
    }
}

#[test]
fn file_only_uses_defaults() {
    assert_eq!(compile(&["main.rot"]), CompileOptions::new("main.rot"));
}

#[test]
fn every_switch() {
    let options = compile(&["--lex-only", "main.rot", "--debug", "--timer"]);
    assert!(options.lex_only);
    assert!(options.dump_tokens);
    assert!(options.timer);
    assert_eq!(options.path, "main.rot");
}

#[test]
fn log_is_an_alias_for_debug() {
    assert!(compile(&["--log", "a.rot"]).dump_tokens);
}

#[test]
fn valued_flags() {
    let options = compile(&["a.rot", "--color=never", "--error-format=json"]);
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(options.error_format, ErrorFormat::Json);
    assert_eq!(compile(&["a.rot", "--color=always"]).color, ColorMode::Always);
}

#[test]
fn help_and_version_win() {
    assert_eq!(parse_args(&["a.rot", "--help"]), Ok(Command::Help));
    assert_eq!(parse_args(&["-V"]), Ok(Command::Version));
}

#[test]
fn missing_file() {
    assert_eq!(parse_args::<&str>(&[]), Err(CliError::MissingFile));
    assert_eq!(parse_args(&["--timer"]), Err(CliError::MissingFile));
}

#[test]
fn unknown_flag() {
    let err = parse_args(&["a.rot", "--fast"]).unwrap_err();
    assert_eq!(err, CliError::UnknownFlag("--fast".into()));
    assert_eq!(err.to_string(), "unknown flag '--fast'");
}

#[test]
fn second_file_is_rejected() {
    assert_eq!(
        parse_args(&["a.rot", "b.rot"]),
        Err(CliError::ExtraFile("b.rot".into()))
    );
}

#[test]
fn invalid_values() {
    let err = parse_args(&["a.rot", "--color=sometimes"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value 'sometimes' for '--color' (expected auto, always or never)"
    );
    assert!(matches!(
        parse_args(&["a.rot", "--error-format=xml"]),
        Err(CliError::InvalidValue { flag: "--error-format", .. })
    ));
}

#[test]
fn dash_alone_is_a_path() {
    assert_eq!(compile(&["-"]).path, "-");
}
