use crate::builder::RegistryBuilder;
use crate::code::ParamCode;
use crate::def::DisplayPriority::{High, Low};

/// File names and directories. No push function: the driver reads these when
/// it performs file I/O.
pub fn register_strings(b: &mut RegistryBuilder) {
	let dir = b.directory().to_string();

	b.string(ParamCode::BasisIn, "basisI!n", "Import basis from a bas file", "default.bas")
		.long_help(
			"Reads an MPS-style basis file. The name is relative to 'directory' unless \
			 it starts with '/' or '~'. '$' stands for the previous value.",
		)
		.priority(High);

	b.string(ParamCode::BasisOut, "basisO!ut", "Export basis as a bas file", "default.bas")
		.long_help(
			"Writes the current basis in MPS basis format, relative to 'directory' \
			 unless absolute.",
		)
		.priority(High);

	b.string(ParamCode::Directory, "directory", "Default directory for import and export", &dir)
		.long_help("Relative file names are resolved against this directory.")
		.priority(High);

	b.string(ParamCode::DirSample, "dirSample", "Directory holding the sample problems", &dir)
		.long_help("Used by unitTest to find the sample models.")
		.priority(Low);

	b.string(ParamCode::DirNetlib, "dirNetlib", "Directory holding the netlib problems", &dir)
		.long_help("Used by the netlib commands to find the netlib models.")
		.priority(Low);

	b.string(ParamCode::DirMiplib, "dirMiplib", "Directory holding the miplib problems", &dir)
		.long_help("Used by branch and cut test runs to find the miplib models.")
		.priority(Low);

	b.string(ParamCode::Export, "export", "Export the model as an mps file", "default.mps")
		.long_help(
			"Writes the current model in MPS format, relative to 'directory' unless \
			 absolute. A name ending in .gz or .bz2 is compressed when support for it \
			 is built in.",
		)
		.priority(High);

	b.string(ParamCode::Import, "import", "Import a model from an mps file", "default.mps")
		.long_help(
			"Reads a model in MPS format, relative to 'directory' unless absolute. \
			 Compressed files are read when support for them is built in.",
		)
		.priority(High);

	b.string(ParamCode::PrintMask, "printM!ask", "Filter printed solution rows and columns", "")
		.long_help(
			"Only rows and columns whose names match this pattern are printed. '*' \
			 matches any suffix and '?' any single character.",
		)
		.priority(High);

	b.string(
		ParamCode::RestoreModel,
		"restore!Model",
		"Restore the model from a binary file",
		"default.prob",
	)
	.long_help("Reads a model written by saveModel, relative to 'directory' unless absolute.")
	.priority(High);

	b.string(ParamCode::SaveModel, "saveM!odel", "Save the model to a binary file", "default.prob")
		.long_help(
			"Writes the model and its solution in a compact binary form that restoreModel \
			 reads back quickly.",
		)
		.priority(High);

	b.string(
		ParamCode::SaveSolution,
		"saveS!olution",
		"Save the solution to a binary file",
		"solution.sln",
	)
	.long_help(
		"Writes row and column counts followed by status, objective, primal and dual \
		 values.",
	)
	.priority(High);

	b.string(ParamCode::Solution, "solu!tion", "Print the solution to a file", "stdout")
		.long_help(
			"Prints the solution, filtered by printMask and shaped by printingOptions. \
			 'stdout' and '-' print to the terminal.",
		)
		.priority(High);
}
