use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::def::DisplayPriority::{High, Low, None};
use crate::push::PushFunction;

/// Keyword lists. Each keyword's engine code is its position in the list.
/// Backends that are not built in stay listed but refuse to be pushed.
pub fn register_keywords(b: &mut RegistryBuilder) {
	b.set_band_push(ParamKind::Keyword, PushFunction::Keyword);

	b.keyword(ParamCode::CommandPrintLevel, "allC!ommands", "Which commands to list", "no")
		.keyword("more")
		.keyword("all")
		.long_help(
			"With 'no' only the common commands are listed by '?'. 'more' adds the \
			 less used ones and 'all' lists everything.",
		)
		.priority(High);

	b.keyword(ParamCode::BiasLu, "biasLU", "Whether factorization is biased towards U", "LX")
		.keyword("UX")
		.keyword("UU")
		.keyword("LL")
		.priority(None);

	b.keyword(ParamCode::BarrierScale, "bscale", "Whether to scale in barrier", "off")
		.keyword("on")
		.keyword("off1")
		.keyword("on1")
		.keyword("off2")
		.keyword("on2")
		.long_help("The numbered variants also select a faster ordering.")
		.priority(None);

	b.keyword(
		ParamCode::Cholesky,
		"chol!esky",
		"Which Cholesky factorization to use in barrier",
		"native",
	)
	.keyword("dense")
	.unavailable("fudge!Long")
	.unavailable("wssmp")
	.unavailable("Uni!versityOfFlorida")
	.unavailable("Taucs")
	.unavailable("Mumps")
	.unavailable("Pardiso")
	.long_help(
		"The native factorization is always present. The others need external \
		 libraries and are refused when those are missing from this build.",
	)
	.priority(High);

	b.keyword(ParamCode::Crash, "crash", "Whether to build a starting basis", "off")
		.keyword("on")
		.keyword("so!low_halim")
		.keyword("lots")
		.keyword("free")
		.keyword("zero")
		.keyword("single!ton")
		.keyword("idiot1")
		.keyword("idiot2")
		.keyword("idiot3")
		.keyword("idiot4")
		.keyword("idiot5")
		.keyword("idiot6")
		.keyword("idiot7")
		.long_help(
			"A crash basis puts as many structurals into the basis as it can while \
			 keeping it triangular. 'on' is Bixby's method and 'so' is Solow and \
			 Halim's. The idiot variants run a short approximate solve first.",
		)
		.priority(High);

	b.keyword(
		ParamCode::Crossover,
		"cross!over",
		"Whether to get a basic solution after barrier",
		"on",
	)
	.keyword("off")
	.keyword("maybe")
	.keyword("presolve")
	.long_help(
		"Interior point methods do not end on a basis. Crossover recovers one for \
		 ranging or branch and cut. 'maybe' skips it for quadratic models.",
	)
	.priority(High);

	b.keyword(ParamCode::Direction, "direction", "Minimize or maximize", "min!imize")
		.keyword("max!imize")
		.keyword("zero")
		.long_help("Minimize is the default. The maximize and minimize commands set this too.")
		.priority(High);

	b.keyword(ParamCode::DualPivot, "dualP!ivot", "Dual pivot choice", "auto!matic")
		.keyword("dant!zig")
		.keyword("partial")
		.keyword("steep!est")
		.keyword("PEsteep!est")
		.keyword("PEdantzig")
		.long_help(
			"Steepest edge is usually best. 'automatic' starts cheap and switches to \
			 steepest once the work is large. The PE variants add positive edge \
			 pricing, tuned by psi.",
		)
		.priority(Low);

	b.keyword(ParamCode::Factorization, "fact!orization", "Which factorization to use", "normal")
		.keyword("dense")
		.keyword("simple")
		.keyword("osl")
		.long_help("'normal' picks a factorization from the model size.")
		.priority(High);

	b.keyword(ParamCode::Gamma, "gamma!(Delta)", "Whether to regularize barrier", "off")
		.keyword("on")
		.keyword("gamma")
		.keyword("delta")
		.keyword("onstrong")
		.keyword("gammastrong")
		.keyword("deltastrong")
		.priority(Low);

	b.keyword(ParamCode::Presolve, "presolve", "Whether to presolve the problem", "on")
		.keyword("off")
		.keyword("more")
		.keyword("file")
		.long_help(
			"Presolve simplifies the model before solving and restores the solution \
			 afterwards. 'more' runs extra passes and 'file' saves the presolved model.",
		)
		.priority(High);

	b.keyword(ParamCode::PrimalPivot, "primalP!ivot", "Primal pivot choice", "auto!matic")
		.keyword("exa!ct")
		.keyword("dant!zig")
		.keyword("part!ial")
		.keyword("steep!est")
		.keyword("change")
		.keyword("sprint")
		.keyword("PEsteep!est")
		.keyword("PEdantzig")
		.long_help(
			"'automatic' starts with partial pricing and switches to exact devex. \
			 'sprint' solves a sequence of small models.",
		)
		.priority(Low);

	b.keyword(
		ParamCode::PrintingOptions,
		"printi!ngOptions",
		"What to print in the solution",
		"normal",
	)
	.keyword("integer")
	.keyword("special")
	.keyword("rows")
	.keyword("all")
	.keyword("csv")
	.keyword("bound!ranging")
	.keyword("rhs!ranging")
	.keyword("objective!ranging")
	.keyword("stats")
	.keyword("boundsint")
	.keyword("boundsall")
	.keyword("fixint")
	.keyword("fixall")
	.long_help(
		"'normal' prints nonzero column values, 'rows' adds row activities and \
		 'all' prints everything. The ranging options print sensitivity data.",
	)
	.priority(High);

	b.keyword(ParamCode::Scaling, "scal!ing", "Whether to scale the problem", "auto!matic")
		.keyword("off")
		.keyword("equi!librium")
		.keyword("geo!metric")
		.keyword("dynamic")
		.keyword("rows!only")
		.long_help(
			"Scaling can improve numerical stability. 'automatic' chooses between \
			 the other methods after looking at the model.",
		)
		.priority(Low);

	b.keyword(ParamCode::Vector, "vector", "Whether to use vector instructions in simplex", "off")
		.keyword("on")
		.priority(None);
}
