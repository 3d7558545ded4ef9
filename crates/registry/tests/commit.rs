//! Value commits: validation is all-or-nothing, push failures are reported
//! after the value is stored.

use std::cell::RefCell;
use std::rc::Rc;

use pivot_registry::{
	Engine, EngineError, ParamCode, ParamError, ParamRegistry, PushError,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn registry() -> ParamRegistry {
	ParamRegistry::new().unwrap()
}

/// Accepts everything except one parameter, and counts what it accepted.
struct Picky {
	refuse: ParamCode,
	applied: Rc<RefCell<usize>>,
}

impl Engine for Picky {
	fn apply(&mut self, code: ParamCode, _params: &ParamRegistry) -> Result<(), EngineError> {
		if code == self.refuse {
			return Err(EngineError::Rejected {
				reason: "not today".to_string(),
			});
		}
		*self.applied.borrow_mut() += 1;
		Ok(())
	}
}

#[test]
fn double_scenario() {
	let mut reg = registry();
	assert_eq!(reg.double(ParamCode::DualBound), Some(0.0));

	reg.commit(ParamCode::DualBound, "1e5").unwrap();
	assert_eq!(reg.double(ParamCode::DualBound), Some(100000.0));

	reg.reset(ParamCode::DualBound);
	assert!(matches!(
		reg.commit(ParamCode::DualBound, "-5"),
		Err(ParamError::Range { .. })
	));
	assert_eq!(reg.double(ParamCode::DualBound), Some(0.0));
}

#[test]
fn boolean_scenario() {
	let mut reg = registry();
	assert!(reg.is_on(ParamCode::BufferedMode));

	reg.commit(ParamCode::BufferedMode, "off").unwrap();
	assert_eq!(reg.keyword_code(ParamCode::BufferedMode), Some(0));

	let err = reg.commit(ParamCode::BufferedMode, "maybe").unwrap_err();
	assert_eq!(
		err,
		ParamError::InvalidKeyword {
			name: "bufferedMode".to_string(),
			token: "maybe".to_string(),
			allowed: vec!["off".to_string(), "on".to_string()],
		}
	);
	assert_eq!(reg.keyword_code(ParamCode::BufferedMode), Some(0));
}

#[rstest]
#[case(ParamCode::MaxIterations, "abc")]
#[case(ParamCode::MaxIterations, "-1")]
#[case(ParamCode::MaxIterations, "3000000000")]
#[case(ParamCode::OutputFormat, "7")]
#[case(ParamCode::Verbose, "")]
#[case(ParamCode::ZeroTolerance, "1e-3")]
#[case(ParamCode::Psi, "2")]
#[case(ParamCode::FakeBound, "0.5")]
#[case(ParamCode::Scaling, "sideways")]
#[case(ParamCode::Crossover, "ma")]
fn failed_commit_keeps_value(#[case] code: ParamCode, #[case] token: &str) {
	let mut reg = registry();
	let before = reg.value(code).clone();
	assert!(reg.commit(code, token).is_err());
	assert_eq!(reg.value(code), &before);
}

#[test]
fn crossover_has_its_own_keywords() {
	let mut reg = registry();
	reg.commit(ParamCode::Crossover, "maybe").unwrap();
	assert_eq!(reg.keyword(ParamCode::Crossover), Some("maybe"));
	assert!(
		reg.definition(ParamCode::Crash)
			.keywords()
			.unwrap()
			.iter()
			.all(|e| e.name() != "maybe")
	);
}

#[test]
fn engine_rejection_keeps_new_value() {
	let applied = Rc::new(RefCell::new(0));
	let mut reg = registry();
	reg.attach_engine(Box::new(Picky {
		refuse: ParamCode::Threads,
		applied: applied.clone(),
	}));

	let err = reg.commit(ParamCode::Threads, "8").unwrap_err();
	assert_eq!(
		err,
		ParamError::PushFailed {
			name: "threads".to_string(),
			source: PushError::Engine(EngineError::Rejected {
				reason: "not today".to_string()
			}),
		}
	);
	assert_eq!(reg.integer(ParamCode::Threads), Some(8));

	reg.commit(ParamCode::MaxIterations, "8").unwrap();
	assert_eq!(*applied.borrow(), 1);
}

#[test]
fn unavailable_keyword_never_reaches_engine() {
	let applied = Rc::new(RefCell::new(0));
	let mut reg = registry();
	reg.attach_engine(Box::new(Picky {
		refuse: ParamCode::Help,
		applied: applied.clone(),
	}));

	let err = reg.commit(ParamCode::Cholesky, "Uni").unwrap_err();
	assert!(matches!(
		err,
		ParamError::PushFailed {
			source: PushError::Unavailable { .. },
			..
		}
	));
	assert_eq!(*applied.borrow(), 0);

	reg.commit(ParamCode::Cholesky, "dense").unwrap();
	assert_eq!(*applied.borrow(), 1);
}

proptest! {
	#[test]
	fn integer_commit_is_all_or_nothing(n in any::<i64>()) {
		let mut reg = registry();
		let result = reg.commit(ParamCode::LogLevel, &n.to_string());
		if (-63..=63).contains(&n) {
			prop_assert!(result.is_ok());
			prop_assert_eq!(reg.integer(ParamCode::LogLevel), Some(n as i32));
		} else {
			let is_range = matches!(result, Err(ParamError::Range { .. }));
			prop_assert!(is_range);
			prop_assert_eq!(reg.integer(ParamCode::LogLevel), Some(1));
		}
	}

	#[test]
	fn double_commit_stays_in_bounds(x in -2.0f64..2.0) {
		let mut reg = registry();
		let ok = reg.commit(ParamCode::Psi, &x.to_string()).is_ok();
		let value = reg.double(ParamCode::Psi).unwrap();
		prop_assert!((-1.1..=1.1).contains(&value));
		prop_assert_eq!(ok, (-1.1..=1.1).contains(&x));
	}
}
