use super::INT_MAX;
use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::def::DisplayPriority::{High, Low, None};
use crate::push::PushFunction;

pub fn register_integers(b: &mut RegistryBuilder) {
	b.set_band_push(ParamKind::Integer, PushFunction::Integer);

	b.integer(
		ParamCode::CppGenerate,
		"cpp!Generate",
		"Generate driver code for the current settings",
		-1,
		50000,
		0,
	)
	.long_help(
		"Writes source that reproduces the current settings. 0 writes the \
		 defaults as well, 1 only changed values, 2 and above add solver setup.",
	)
	.priority(Low);

	b.integer(
		ParamCode::Decompose,
		"decomp!ose",
		"Whether to try decomposition",
		-INT_MAX,
		INT_MAX,
		0,
	)
	.long_help("0 is off, 1 picks the number of blocks, larger values ask for that many.")
	.priority(Low);

	b.integer(
		ParamCode::DenseThreshold,
		"dense!Threshold",
		"Threshold for using dense factorization",
		-1,
		10000,
		-1,
	)
	.long_help("Models with fewer rows than this use a dense factorization; -1 lets the engine decide.")
	.priority(Low);

	b.integer(ParamCode::Dualize, "dualize", "Solve the dual reformulation", 0, 4, 0)
		.long_help("0 is off, 3 lets the engine decide, the other values force a variant.")
		.priority(Low);

	b.integer(
		ParamCode::IdiotCrash,
		"idiot!Crash",
		"Whether to run the idiot crash",
		-1,
		INT_MAX,
		0,
	)
	.long_help(
		"Runs an approximate solve to get a good starting point. -1 lets the \
		 engine decide, 0 is off, larger values give the pass count.",
	)
	.priority(High);

	b.integer(ParamCode::LogLevel, "log!Level", "Amount of detail in solver output", -63, 63, 1)
		.long_help("0 prints nothing, 1 a summary and higher values progressively more.")
		.priority(High);

	b.integer(
		ParamCode::MaxFactor,
		"maxF!actor",
		"Iterations between refactorizations",
		1,
		INT_MAX,
		0,
	)
	.long_help("The engine refactorizes earlier when numerics demand it.")
	.priority(High);

	b.integer(ParamCode::MaxIterations, "maxIt!erations", "Iteration limit", 0, INT_MAX, 0)
		.long_help("Stops the simplex methods after this many iterations. Later solves pick up where it stopped.")
		.priority(High);

	b.integer(ParamCode::OutputFormat, "output!Format", "Format used by export", 1, 6, 0)
		.long_help(
			"Odd values write free MPS, even values fixed; higher values write more \
			 digits.",
		)
		.priority(High);

	b.integer(ParamCode::PresolvePasses, "passP!resolve", "Number of presolve passes", -200, 100, 0)
		.long_help("Negative values enable extra presolve techniques.")
		.priority(Low);

	b.integer(ParamCode::PerturbValue, "pertV!alue", "Method of perturbation", -5000, 102, 0)
		.priority(Low);

	b.integer(ParamCode::PrintOptions, "pO!ptions", "Extra print options", 0, INT_MAX, 0)
		.long_help("Bit flags for diagnostic printing.")
		.priority(Low);

	b.integer(ParamCode::RandomSeed, "randomS!eed", "Random seed", 0, INT_MAX, 1234567)
		.long_help("0 seeds from the clock.")
		.priority(High);

	b.integer(
		ParamCode::SlpValue,
		"slp!Value",
		"Sequential LP passes before primal",
		-50000,
		50000,
		0,
	)
	.long_help("Only meaningful for quadratic objectives.")
	.priority(Low);

	b.integer(
		ParamCode::SmallFactorization,
		"small!Factorization",
		"Threshold for using small factorization",
		-1,
		10000,
		-1,
	)
	.long_help("Models with fewer rows than this use the simple factorization; -1 lets the engine decide.")
	.priority(Low);

	b.integer(ParamCode::SpecialOptions, "special!Options", "Extra solver options", 0, INT_MAX, 0)
		.priority(None);

	b.integer(
		ParamCode::SprintCrash,
		"sprint!Crash",
		"Whether to run the sprint crash",
		-1,
		INT_MAX,
		0,
	)
	.long_help(
		"Solves a sequence of small models built from promising columns. -1 lets \
		 the engine decide, 0 is off, larger values give the pass count.",
	)
	.priority(High);

	b.integer(
		ParamCode::Substitution,
		"subs!titution",
		"Longest column to substitute in presolve",
		0,
		10000,
		3,
	)
	.long_help("Substitution removes a column by eliminating it through a row.")
	.priority(None);

	b.integer(ParamCode::Threads, "thread!s", "Number of threads to use", -100, 100000, 0)
		.long_help("Only used by components that run in parallel.")
		.priority(High);

	b.integer(ParamCode::Verbose, "verbose", "Extra detail in help listings", 0, 31, 0)
		.long_help(
			"Bit 1 adds long help to listings, bit 2 lists parameter values, bit 4 \
			 shows the accepted range or keywords.",
		)
		.priority(None);
}
