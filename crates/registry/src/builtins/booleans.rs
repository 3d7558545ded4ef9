use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::def::DisplayPriority::{High, Low, None};
use crate::push::PushFunction;

pub fn register_booleans(b: &mut RegistryBuilder) {
	b.set_band_push(ParamKind::Boolean, PushFunction::Keyword);

	b.boolean(
		ParamCode::AutoScale,
		"auto!Scale",
		"Whether to scale objective and bounds that look odd",
		"off",
	)
	.long_help(
		"Experimental. Worth trying when objective values or equality rows are \
		 very large; objectiveScale and rhsScale give finer control.",
	)
	.priority(None);

	b.boolean(ParamCode::BufferedMode, "buff!eredMode", "Whether to buffer printed output", "on")
		.long_help("Switching this off flushes output after every line.")
		.priority(High);

	b.boolean(
		ParamCode::ErrorsAllowed,
		"error!sAllowed",
		"Whether to accept models with import errors",
		"off",
	)
	.long_help(
		"By default a model that had errors while reading is discarded. When on, \
		 recoverable errors are ignored. Set this before import.",
	)
	.priority(High);

	b.boolean(ParamCode::KeepNames, "keepN!ames", "Whether to keep names from import", "on")
		.long_help("Dropping names saves space. Set this before import.")
		.priority(High);

	b.boolean(ParamCode::Kkt, "KKT", "Whether to use KKT factorization in barrier", "off")
		.priority(Low);

	b.boolean(ParamCode::Messages, "mess!ages", "Whether message numbers are printed", "off")
		.long_help(
			"When on, each log line carries its message number, which helps when \
			 searching logs for a particular message.",
		)
		.priority(High);

	b.boolean(ParamCode::Perturbation, "perturb!ation", "Whether to perturb the problem", "on")
		.long_help(
			"Perturbation helps against cycling. Large models with unit elements and \
			 unit right hand sides benefit most.",
		)
		.priority(High);

	b.boolean(ParamCode::Pfi, "PFI", "Whether to use the product form of inverse", "off")
		.long_help("The default update is Forrest-Tomlin.")
		.priority(None);

	b.boolean(
		ParamCode::SparseFactor,
		"spars!eFactor",
		"Whether the factorization is treated as sparse",
		"on",
	)
	.priority(None);
}
