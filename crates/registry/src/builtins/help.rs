use crate::builder::RegistryBuilder;
use crate::code::{ParamCode, ParamKind};
use crate::push::PushFunction;

pub fn register_help(b: &mut RegistryBuilder) {
	b.set_band_push(ParamKind::Help, PushFunction::Command);

	b.help(ParamCode::GeneralQuery, "?", "List parameter names")
		.long_help("Lists the names of the parameters shown at the current allCommands level.");

	b.help(ParamCode::FullGeneralQuery, "???", "List every parameter with its short help")
		.long_help("Lists every parameter, whatever its display tier, with a one-line description.");

	b.help(ParamCode::Help, "help", "Print usage")
		.long_help(
			"Parameters are entered as a name followed by a value. Names may be \
			 shortened down to the part before the '!' shown in listings. \
			 Commands such as dualSimplex take no value.",
		);
}
