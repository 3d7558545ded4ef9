//! Stand-in engine that reports every value it is handed.

use pivot_registry::{Engine, EngineError, ParamCode, ParamRegistry};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingEngine {
	/// Values applied so far.
	applied: usize,
}

impl Engine for LoggingEngine {
	fn apply(&mut self, code: ParamCode, params: &ParamRegistry) -> Result<(), EngineError> {
		self.applied += 1;
		let def = params.definition(code);
		info!(
			param = def.name(),
			value = %params.display_value(code),
			applied = self.applied,
			"engine applied value"
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_applied_values() {
		let params = ParamRegistry::new().unwrap();
		let mut engine = LoggingEngine::default();
		engine.apply(ParamCode::Presolve, &params).unwrap();
		engine.apply(ParamCode::DualSimplex, &params).unwrap();
		assert_eq!(engine.applied, 2);
	}
}
