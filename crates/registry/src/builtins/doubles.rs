use super::DBL_MAX;
use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::def::DisplayPriority::{High, Low, None};
use crate::push::PushFunction;

/// Real-valued tolerances and scale factors. A default of zero leaves the
/// choice to the engine, so defaults may sit outside the accepted range.
pub fn register_doubles(b: &mut RegistryBuilder) {
	b.set_band_push(ParamKind::Double, PushFunction::Double);

	b.double(
		ParamCode::DualBound,
		"dualB!ound",
		"Initially algorithm acts as if no gap between bounds exceeds this value",
		1.0e-20,
		1.0e20,
		0.0,
	)
	.long_help(
		"The dual simplex method first acts as if every variable has both bounds, \
		 with missing ones placed this far from the other. A large value is safe \
		 but can slow the solve down.",
	)
	.priority(High);

	b.double(
		ParamCode::DualTolerance,
		"dualT!olerance",
		"Largest dual infeasibility allowed at optimum",
		1.0e-20,
		DBL_MAX,
		0.0,
	)
	.long_help(
		"The default is usually fine. Raising it a little can help a struggling \
		 dual simplex; clean up afterwards with primal simplex and presolve off.",
	)
	.priority(High);

	b.double(
		ParamCode::FakeBound,
		"fakeB!ound",
		"Treat every bound as at most this value",
		1.0,
		1.0e15,
		0.0,
	)
	.priority(None);

	b.double(
		ParamCode::ObjectiveScale,
		"objective!Scale",
		"Scale factor applied to the objective",
		-DBL_MAX,
		DBL_MAX,
		1.0,
	)
	.long_help(
		"Multiplies the objective before solving and divides it back out \
		 afterwards. Useful when costs are very large or very small.",
	)
	.priority(Low);

	b.double(
		ParamCode::PresolveTolerance,
		"preT!olerance",
		"Tolerance used by presolve",
		1.0e-20,
		DBL_MAX,
		0.0,
	)
	.long_help("Raise it when presolve wrongly declares a model infeasible.")
	.priority(High);

	b.double(
		ParamCode::PrimalTolerance,
		"primalT!olerance",
		"Largest primal infeasibility allowed at optimum",
		1.0e-20,
		DBL_MAX,
		0.0,
	)
	.long_help(
		"The default is usually fine. Raising it a little can help a struggling \
		 primal simplex.",
	)
	.priority(High);

	b.double(
		ParamCode::PrimalWeight,
		"primalW!eight",
		"Initial weight on infeasibilities in primal",
		1.0e-20,
		DBL_MAX,
		0.0,
	)
	.long_help(
		"Primal simplex minimizes the objective plus this weight times the sum of \
		 infeasibilities. It grows automatically when the model stays infeasible.",
	)
	.priority(High);

	b.double(ParamCode::Psi, "psi", "Pricing factor for the positive edge rules", -1.1, 1.1, -0.5)
		.long_help(
			"Weights compatible variables in the PE pivot rules. Values near 1 favour \
			 them strongly; a negative value leaves the choice to the engine.",
		)
		.priority(High);

	b.double(
		ParamCode::Progress,
		"progress!(Interval)",
		"Seconds between progress reports",
		-DBL_MAX,
		DBL_MAX,
		0.7,
	)
	.long_help("Zero or less switches progress reports off.")
	.priority(High);

	b.double(
		ParamCode::ReallyObjectiveScale,
		"reallyO!bjectiveScale",
		"Scale the objective in place",
		-DBL_MAX,
		DBL_MAX,
		1.0,
	)
	.priority(None);

	b.double(
		ParamCode::RhsScale,
		"rhs!Scale",
		"Scale factor applied to rhs and bounds",
		-DBL_MAX,
		DBL_MAX,
		1.0,
	)
	.long_help("Multiplies right hand sides and bounds before solving.")
	.priority(None);

	b.double(ParamCode::TimeLimit, "sec!onds", "Time limit in seconds", -1.0, DBL_MAX, -1.0)
		.long_help("Stops the solve after this many seconds. A negative value means no limit.")
		.priority(High);

	b.double(
		ParamCode::ZeroTolerance,
		"zeroT!olerance",
		"Elements below this are treated as zero",
		1.0e-100,
		1.0e-5,
		1.0e-20,
	)
	.long_help("Matrix elements smaller than this in absolute value are dropped on import.")
	.priority(High);
}
