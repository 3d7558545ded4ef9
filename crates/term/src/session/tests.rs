use pivot_registry::ParamError;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn session() -> Session<Vec<u8>> {
	Session::new(ParamRegistry::new().unwrap(), Vec::new())
}

fn output(session: &Session<Vec<u8>>) -> String {
	String::from_utf8_lossy(session.out()).into_owned()
}

#[rstest]
#[case("-presolve", "presolve")]
#[case("--presolve", "presolve")]
#[case("presolve", "presolve")]
#[case("---x", "-x")]
#[case("-", "")]
fn strips_one_dash_prefix(#[case] token: &str, #[case] name: &str) {
	assert_eq!(strip_dashes(token), name);
}

#[test]
fn classic_command_line() {
	let mut s = session();
	let flow = s
		.run(["-presolve", "off", "-maxIt", "100", "-dualS"])
		.unwrap();
	assert_eq!(flow, Flow::Continue);
	assert_eq!(s.registry().keyword(ParamCode::Presolve), Some("off"));
	assert_eq!(s.registry().integer(ParamCode::MaxIterations), Some(100));
	assert_eq!(s.failures(), 0);
	let out = output(&s);
	assert!(out.contains("presolve was changed from on to off"), "{out}");
	assert!(out.contains("maxIterations was changed from 0 to 100"), "{out}");
}

#[test]
fn end_stops_processing() {
	let mut s = session();
	let flow = s.run(["-maxIt", "5", "end", "-maxIt", "6"]).unwrap();
	assert_eq!(flow, Flow::Exit);
	assert_eq!(s.registry().integer(ParamCode::MaxIterations), Some(5));
}

#[test]
fn missing_value_shows_current() {
	let mut s = session();
	s.run(["-seconds"]).unwrap();
	assert_eq!(output(&s), "seconds has value -1\n");
}

#[test]
fn bad_tokens_are_reported_and_skipped() {
	let mut s = session();
	s.run(["-presolv", "-maxIt", "-5", "-scaling", "sideways", "-log", "2"])
		.unwrap();
	assert_eq!(s.failures(), 3);
	let out = output(&s);
	let expected_invalid = ParamError::Invalid {
		token: "presolv".to_string(),
		suggestion: Some("presolve".to_string()),
	}
	.to_string();
	assert!(out.contains(&expected_invalid), "{out}");
	assert!(out.contains("outside"), "{out}");
	assert!(out.contains("not a keyword of scaling"), "{out}");
	assert_eq!(s.registry().integer(ParamCode::LogLevel), Some(2));
}

#[test]
fn maximize_sets_direction() {
	let mut s = session();
	s.run(["-max"]).unwrap();
	assert_eq!(s.registry().keyword(ParamCode::Direction), Some("maximize"));
	s.run(["-min"]).unwrap();
	assert_eq!(s.registry().keyword(ParamCode::Direction), Some("minimize"));
}

#[test]
fn unavailable_keyword_is_kept_but_reported() {
	let mut s = session();
	s.run(["-cholesky", "Taucs"]).unwrap();
	assert_eq!(s.failures(), 1);
	assert_eq!(s.registry().keyword(ParamCode::Cholesky), Some("Taucs"));
	let out = output(&s);
	assert!(out.contains("cholesky was changed from native to Taucs"), "{out}");
	assert!(out.contains("not available"), "{out}");
}

#[test]
fn query_lists_names_at_level() {
	let mut s = session();
	s.run(["?"]).unwrap();
	let common = output(&s);
	assert!(common.contains("dualS!implex"), "{common}");
	assert!(!common.contains("netlibB!arrier"), "{common}");

	let mut s = session();
	s.run(["allC", "more", "?"]).unwrap();
	assert!(output(&s).contains("netlibB!arrier"));
}

#[test]
fn full_query_includes_short_help() {
	let mut s = session();
	s.run(["???"]).unwrap();
	let out = output(&s);
	assert!(out.contains("Integer parameters:"), "{out}");
	assert!(out.contains("Solve with the dual simplex method"), "{out}");
	assert!(out.contains("PFI"), "{out}");
}

#[test]
fn verbose_adds_detail() {
	let mut s = session();
	s.run(["verbose", "7", "???"]).unwrap();
	let out = output(&s);
	assert!(out.contains("current 7 (default 0)"), "{out}");
	assert!(out.contains("accepts on off more file"), "{out}");
}

#[test]
fn help_prints_usage() {
	let mut s = session();
	s.run(["help"]).unwrap();
	assert!(output(&s).contains("Type 'end' to stop."));
}

#[test]
fn wrap_respects_width() {
	let lines = wrap(&["aaaa", "bbbb", "cc", "d"], 9);
	assert_eq!(lines, vec!["aaaa bbbb", "cc d"]);
}
