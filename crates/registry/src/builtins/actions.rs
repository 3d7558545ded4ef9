use crate::builder::RegistryBuilder;
use crate::code::ParamCode;
use crate::def::DisplayPriority::{High, Low, None};

pub fn register_actions(b: &mut RegistryBuilder) {
	b.action(ParamCode::AllSlack, "allS!lack", "Reset the basis to all slack")
		.long_help(
			"Throws away the current basis and solution. Mostly useful when tuning, \
			 since the first solve starts from an all slack basis anyway.",
		)
		.priority(None);

	b.action(
		ParamCode::Barrier,
		"barr!ier",
		"Solve with the primal dual predictor corrector method",
	)
	.long_help(
		"Solves the current model with an interior point method. Quality depends \
		 heavily on the Cholesky ordering and factorization in use. Quadratic \
		 objectives are supported.",
	)
	.priority(High);

	b.action(ParamCode::BranchAndCut, "branch!AndCut", "Run branch and cut")
		.priority(High);

	b.action(ParamCode::DualSimplex, "dualS!implex", "Solve with the dual simplex method")
		.long_help(
			"Solves the continuous relaxation with dual steepest edge pricing. Presolve, \
			 scaling, crash, the dual pivot rule, the fake bound and the tolerances all \
			 affect time and iteration counts.",
		)
		.priority(High);

	b.action(ParamCode::SolveContinuous, "initialS!olve", "Solve the continuous relaxation")
		.long_help("Solves to continuous optimality without adding cuts.")
		.priority(High);

	b.action(ParamCode::EitherSimplex, "either!Simplex", "Solve with dual or primal simplex")
		.long_help("Picks dual or primal simplex from a quick look at the model statistics.")
		.priority(High);

	b.action(ParamCode::Solve, "solv!e", "Solve with dual or primal simplex")
		.long_help("Same as eitherSimplex.")
		.priority(High);

	b.action(ParamCode::Environment, "environ!ment", "Read commands from the environment")
		.long_help("Reads further commands from the PIVOT_ENVIRONMENT variable.")
		.priority(None);

	b.action(ParamCode::Exit, "end", "Stop")
		.long_help("Ends the session.")
		.priority(High);

	b.action(ParamCode::GmplSolution, "gsolu!tion", "Write the solution in glpk format")
		.long_help(
			"Writes a glpk solution file relative to 'directory'. When the model came \
			 from a gmpl file its reports are produced as well.",
		)
		.priority(High);

	b.action(ParamCode::Guess, "guess", "Suggest parameter settings")
		.long_help(
			"Looks at the model statistics, runs a first solve and prints settings that \
			 may be worth trying.",
		)
		.priority(High);

	b.action(ParamCode::Maximize, "max!imize", "Maximize the objective")
		.long_help("Shorthand for 'direction maximize'.")
		.priority(High);

	b.action(ParamCode::Minimize, "min!imize", "Minimize the objective")
		.long_help(
			"Minimizing is the default; this is only needed after a previous 'maximize'. \
			 Shorthand for 'direction minimize'.",
		)
		.priority(High);

	b.action(ParamCode::NetlibEither, "netlib", "Solve the netlib test set")
		.long_help("Runs the unit test, then solves every netlib model with dual or primal simplex.")
		.priority(Low);

	b.action(ParamCode::NetlibBarrier, "netlibB!arrier", "Solve the netlib test set with barrier")
		.long_help("Runs the unit test, then solves every netlib model with the barrier method.")
		.priority(Low);

	b.action(ParamCode::NetlibDual, "netlibD!ual", "Solve the netlib test set with dual simplex")
		.long_help("Runs the unit test, then solves every netlib model with dual simplex.")
		.priority(Low);

	b.action(
		ParamCode::NetlibPrimal,
		"netlibP!rimal",
		"Solve the netlib test set with primal simplex",
	)
	.long_help("Runs the unit test, then solves every netlib model with primal simplex.")
	.priority(Low);

	b.action(ParamCode::NetlibTune, "netlibT!une", "Solve the netlib test set with the best method")
		.long_help(
			"Runs the unit test, then solves every netlib model with whichever method \
			 is known to work best for it.",
		)
		.priority(Low);

	b.action(ParamCode::Network, "network", "Try to convert the matrix to a network")
		.long_help(
			"Network matrices are stored compactly and allow a network factorization, \
			 which is the main gain.",
		)
		.priority(None);

	b.action(ParamCode::OutDuplicateRows, "outDup!licates", "Remove duplicate rows")
		.priority(None);

	b.action(ParamCode::Parametrics, "para!metrics", "Read parametric data and run parametrics")
		.long_help(
			"Reads a csv-like file with ROWS and optional COLUMNS sections relative to \
			 'directory' and runs parametric analysis over theta. The file has to end \
			 with ENDATA and cannot be compressed.",
		)
		.priority(High);

	b.action(ParamCode::PlusMinus, "plus!Minus", "Try to convert the matrix to +-1 form")
		.long_help(
			"When every element is +1 or -1 the values need not be stored, which \
			 mostly saves memory.",
		)
		.priority(None);

	b.action(ParamCode::PrimalSimplex, "primalS!implex", "Solve with the primal simplex method")
		.long_help(
			"Solves the continuous relaxation with exact devex pricing by default. \
			 Presolve, scaling, crash, the primal pivot rule, the infeasibility weight \
			 and the tolerances all affect time and iteration counts.",
		)
		.priority(High);

	b.action(ParamCode::RestoreSolution, "restoreS!olution", "Read a binary solution file")
		.long_help("Reads a solution written by saveSolution, relative to 'directory'.")
		.priority(High);

	b.action(ParamCode::ReallyScale, "reallyS!cale", "Scale the model in place")
		.priority(None);

	b.action(ParamCode::Reverse, "reverse", "Flip the sign of the objective")
		.long_help("Useful for checking that maximization behaves.")
		.priority(High);

	b.action(ParamCode::Sleep, "sleep", "Pause for debugging")
		.long_help("Waits so that intermediate files can be copied for debugging.")
		.priority(High);

	b.action(ParamCode::Statistics, "stat!istics", "Print model statistics")
		.long_help(
			"Prints statistics for the current model, after presolve when presolve is on. \
			 A log level above 1 prints more.",
		)
		.priority(High);

	b.action(ParamCode::Tighten, "tightLP", "Tighten bounds before solving")
		.priority(None);

	b.action(ParamCode::UnitTest, "unitTest", "Run the unit test")
		.long_help("Runs the solver's own unit test against the sample directory.")
		.priority(Low);

	b.action(ParamCode::UserClp, "userClp", "Run user hook code")
		.long_help("Calls the user hook in the driver, for experiments that need custom code.")
		.priority(None);
}
