//! Name resolution over the builtin table and over a deliberately
//! overlapping custom table.

use pivot_registry::builtins::{
	register_actions, register_booleans, register_doubles, register_help, register_integers,
	register_keywords,
};
use pivot_registry::{
	CaseSensitivity, ParamCode, ParamError, ParamKind, ParamRegistry, RegistryBuilder,
	RegistryConfig, Resolution,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn builtin() -> ParamRegistry {
	ParamRegistry::new().unwrap()
}

/// Builtin table except for the string band, where `basisIn` and `basisOut`
/// share the abbreviation `basis`.
fn overlapping() -> ParamRegistry {
	let mut b = RegistryBuilder::new(RegistryConfig::default());
	register_help(&mut b);
	register_actions(&mut b);
	register_keywords(&mut b);
	register_booleans(&mut b);
	register_doubles(&mut b);
	register_integers(&mut b);
	b.string(ParamCode::BasisIn, "basis!In", "Read basis", "in.bas");
	b.string(ParamCode::BasisOut, "basis!Out", "Write basis", "out.bas");
	for code in ParamKind::String.codes().skip(2) {
		b.string(code, &format!("file{}", code.index()), "Some file", "");
	}
	b.finish().unwrap()
}

#[test]
fn full_names_resolve_exactly() {
	let reg = builtin();
	for def in reg.definitions() {
		assert_eq!(
			reg.resolve(def.name()),
			Resolution {
				found: Some(def.code()),
				matches: 1
			},
			"{}",
			def.name()
		);
	}
}

#[test]
fn full_names_resolve_exactly_despite_overlap() {
	let reg = overlapping();
	assert_eq!(reg.resolve("basisOut").found, Some(ParamCode::BasisOut));
	assert_eq!(reg.resolve("basisOut").matches, 1);
	assert_eq!(reg.resolve("basisIn").found, Some(ParamCode::BasisIn));
}

#[test]
fn short_tokens_never_reach_their_parameter() {
	let reg = builtin();
	for def in reg.definitions() {
		let name: Vec<char> = def.name().chars().collect();
		for len in 0..def.pattern().min_len() {
			let token: String = name[..len].iter().collect();
			assert_ne!(reg.resolve(&token).found, Some(def.code()), "{token:?}");
		}
	}
}

#[test]
fn shared_prefix_is_ambiguous_and_first_wins() {
	let reg = overlapping();
	assert_eq!(reg.resolve("basis"), Resolution {
		found: Some(ParamCode::BasisIn),
		matches: 2
	});
	assert_eq!(reg.overlaps(), vec![(ParamCode::BasisIn, ParamCode::BasisOut)]);
	assert_eq!(
		reg.lookup("basis"),
		Err(ParamError::Ambiguous {
			token: "basis".to_string(),
			matches: 2,
			first: ParamCode::BasisIn,
		})
	);
	assert_eq!(reg.lookup("basisO"), Ok(ParamCode::BasisOut));
}

#[test]
fn basis_scenario_on_builtins() {
	let reg = builtin();
	assert_eq!(reg.resolve("basis"), Resolution::INVALID);
	assert_eq!(reg.resolve("basisI"), Resolution {
		found: Some(ParamCode::BasisIn),
		matches: 1
	});
	assert_eq!(reg.resolve("basisO").found, Some(ParamCode::BasisOut));
}

#[rstest]
#[case("dualS", ParamCode::DualSimplex)]
#[case("DUALS", ParamCode::DualSimplex)]
#[case("maxIt", ParamCode::MaxIterations)]
#[case("max", ParamCode::Maximize)]
#[case("maxF", ParamCode::MaxFactor)]
#[case("netlib", ParamCode::NetlibEither)]
#[case("netlibB", ParamCode::NetlibBarrier)]
#[case("restore", ParamCode::RestoreModel)]
#[case("restoreS", ParamCode::RestoreSolution)]
#[case("?", ParamCode::GeneralQuery)]
#[case("???", ParamCode::FullGeneralQuery)]
#[case("gamma", ParamCode::Gamma)]
#[case("gamma(Delta)", ParamCode::Gamma)]
#[case("sec", ParamCode::TimeLimit)]
fn common_abbreviations(#[case] token: &str, #[case] code: ParamCode) {
	assert_eq!(builtin().lookup(token), Ok(code));
}

#[rstest]
#[case("")]
#[case("??")]
#[case("xyzzy")]
#[case("dual")]
#[case("netw")]
#[case("dualSimplexx")]
fn unmatched_tokens_are_invalid(#[case] token: &str) {
	assert_eq!(builtin().resolve(token), Resolution::INVALID);
}

#[test]
fn invalid_lookup_suggests_name() {
	assert_eq!(
		builtin().lookup("presolv"),
		Err(ParamError::Invalid {
			token: "presolv".to_string(),
			suggestion: Some("presolve".to_string()),
		})
	);
}

#[test]
fn sensitive_registry_rejects_wrong_case() {
	let config = RegistryConfig {
		case: CaseSensitivity::Sensitive,
		..RegistryConfig::default()
	};
	let reg = ParamRegistry::with_config(config).unwrap();
	assert_eq!(reg.resolve("duals"), Resolution::INVALID);
	assert_eq!(reg.resolve("dualS").found, Some(ParamCode::DualSimplex));
}

proptest! {
	#[test]
	fn resolution_is_consistent(token in "[a-zA-Z?!]{0,14}") {
		let reg = builtin();
		let res = reg.resolve(&token);
		match res.found {
			None => prop_assert_eq!(res.matches, 0),
			Some(code) => {
				prop_assert!(res.matches >= 1);
				let def = reg.definition(code);
				let len = token.chars().count();
				prop_assert!(len >= def.pattern().min_len());
				prop_assert!(len <= def.pattern().len());
				prop_assert!(def.name().to_ascii_lowercase().starts_with(&token.to_ascii_lowercase()));
			}
		}
	}

	#[test]
	fn non_prefixes_are_invalid(token in "[a-z]{1,12}") {
		let reg = builtin();
		let lower = token.to_ascii_lowercase();
		let is_prefix = reg
			.definitions()
			.any(|def| def.name().to_ascii_lowercase().starts_with(&lower));
		prop_assume!(!is_prefix);
		prop_assert_eq!(reg.resolve(&token), Resolution::INVALID);
	}

	#[test]
	fn builtin_lookup_never_ambiguous(token in "[a-zA-Z]{1,10}") {
		let res = builtin().resolve(&token);
		prop_assert!(res.matches <= 1);
	}
}
