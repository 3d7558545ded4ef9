use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::code::ParamCode;

const SAMPLE: &str = r#"
case_sensitive = false
directory = "/data/models/"

[settings]
presolve = "off"
maxIt = 5000
dualT = 1e-7
keepN = false
solu = "out.txt"
"#;

#[test]
fn parses_sample() {
	let config = Config::from_toml_str(SAMPLE).unwrap();
	assert_eq!(config.case_sensitive, Some(false));
	assert_eq!(config.directory.as_deref(), Some("/data/models/"));
	let keys: Vec<_> = config.settings.keys().map(String::as_str).collect();
	assert_eq!(keys, vec!["presolve", "maxIt", "dualT", "keepN", "solu"]);
	assert_eq!(config.settings["maxIt"], SettingValue::Integer(5000));
	assert_eq!(config.settings["keepN"], SettingValue::Bool(false));
}

#[test]
fn registry_config_overrides() {
	let config = Config::from_toml_str("case_sensitive = true\n").unwrap();
	let rc = config.registry_config();
	assert_eq!(rc.case, CaseSensitivity::Sensitive);
	assert_eq!(rc.directory, default_directory());
}

#[test]
fn unknown_fields_are_errors() {
	let err = Config::from_toml_str("colour = \"blue\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Parse { path: None, .. }), "{err}");
}

#[test]
fn apply_commits_in_order() {
	let config = Config::from_toml_str(SAMPLE).unwrap();
	let mut reg = ParamRegistry::with_config(config.registry_config()).unwrap();
	let warnings = config.apply(&mut reg);
	assert_eq!(warnings, Vec::new());
	assert_eq!(reg.keyword(ParamCode::Presolve), Some("off"));
	assert_eq!(reg.integer(ParamCode::MaxIterations), Some(5000));
	assert_eq!(reg.double(ParamCode::DualTolerance), Some(1e-7));
	assert!(!reg.is_on(ParamCode::KeepNames));
	assert_eq!(reg.string(ParamCode::Solution), Some("out.txt"));
	assert_eq!(reg.directory(), "/data/models/");
}

#[test]
fn later_settings_win() {
	let config = Config::from_toml_str("[settings]\nmaxIt = 10\nmaxIterations = 20\n").unwrap();
	let mut reg = ParamRegistry::new().unwrap();
	assert_eq!(config.apply(&mut reg), Vec::new());
	assert_eq!(reg.integer(ParamCode::MaxIterations), Some(20));
}

#[test]
fn settings_apply_in_file_order_not_sorted() {
	let config = Config::from_toml_str("[settings]\nmaxIterations = 20\nmaxIt = 10\n").unwrap();
	let keys: Vec<_> = config.settings.keys().map(String::as_str).collect();
	assert_eq!(keys, vec!["maxIterations", "maxIt"]);
	let mut reg = ParamRegistry::new().unwrap();
	assert_eq!(config.apply(&mut reg), Vec::new());
	assert_eq!(reg.integer(ParamCode::MaxIterations), Some(10));
}

#[test]
fn bad_settings_become_warnings() {
	let input = r#"
[settings]
nosuchthing = 1
dualSimplex = "on"
maxIt = -4
presolve = "sometimes"
log = 3
"#;
	let config = Config::from_toml_str(input).unwrap();
	let mut reg = ParamRegistry::new().unwrap();
	let warnings = config.apply(&mut reg);

	assert_eq!(warnings.len(), 4);
	assert!(matches!(
		&warnings[0],
		ConfigWarning::Unresolved {
			source: ParamError::Invalid { .. },
			..
		}
	));
	assert_eq!(warnings[1], ConfigWarning::NotASetting {
		key: "dualSimplex".to_string(),
		name: "dualSimplex".to_string(),
	});
	assert!(matches!(
		&warnings[2],
		ConfigWarning::Rejected {
			source: ParamError::Range { .. },
			..
		}
	));
	assert!(matches!(
		&warnings[3],
		ConfigWarning::Rejected {
			source: ParamError::InvalidKeyword { .. },
			..
		}
	));
	assert_eq!(reg.integer(ParamCode::MaxIterations), Some(0));
	assert_eq!(reg.integer(ParamCode::LogLevel), Some(3));
	assert_eq!(
		warnings[1].to_string(),
		"setting 'dualSimplex': dualSimplex is a command, not a setting"
	);
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SAMPLE.as_bytes()).unwrap();
	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.settings.len(), 5);
}

#[test]
fn load_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("pivot.toml");
	assert!(matches!(
		Config::load(&missing),
		Err(ConfigError::Io { path, .. }) if path == missing
	));

	let broken = dir.path().join("broken.toml");
	std::fs::write(&broken, "[settings\n").unwrap();
	assert!(matches!(
		Config::load(&broken),
		Err(ConfigError::Parse { path: Some(path), .. }) if path == broken
	));
}

#[test]
fn setting_tokens() {
	assert_eq!(SettingValue::Bool(true).to_token(), "on");
	assert_eq!(SettingValue::Integer(-3).to_token(), "-3");
	assert_eq!(SettingValue::Float(0.5).to_token(), "0.5");
	assert_eq!(SettingValue::Text("auto".into()).to_token(), "auto");
}
