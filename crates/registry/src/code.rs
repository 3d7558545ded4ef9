//! Stable parameter codes and the kind bands they are partitioned into.
//!
//! Every parameter owns exactly one [`ParamCode`]. Codes are dense and grouped
//! into contiguous bands, one per [`ParamKind`], so band-wide work (setting the
//! push function of every double parameter, for instance) iterates a range
//! instead of naming each parameter.

use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::error::ParamError;

/// The value kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
	/// Lists parameters or prints usage. Carries no value.
	Help,
	/// Triggers an engine operation. Carries no value.
	Action,
	/// Free-form text, usually a file or directory name.
	String,
	/// One keyword out of a declared list.
	Keyword,
	/// A keyword parameter restricted to `off`/`on`.
	Boolean,
	/// Bounded floating point value.
	Double,
	/// Bounded integer value.
	Integer,
}

impl ParamKind {
	/// All kinds in band order.
	pub const ALL: [ParamKind; 7] = [
		ParamKind::Help,
		ParamKind::Action,
		ParamKind::String,
		ParamKind::Keyword,
		ParamKind::Boolean,
		ParamKind::Double,
		ParamKind::Integer,
	];

	/// First code of this kind's band.
	pub const fn first(self) -> ParamCode {
		match self {
			ParamKind::Help => ParamCode::GeneralQuery,
			ParamKind::Action => ParamCode::AllSlack,
			ParamKind::String => ParamCode::BasisIn,
			ParamKind::Keyword => ParamCode::CommandPrintLevel,
			ParamKind::Boolean => ParamCode::AutoScale,
			ParamKind::Double => ParamCode::DualBound,
			ParamKind::Integer => ParamCode::CppGenerate,
		}
	}

	/// Last code of this kind's band (inclusive).
	pub const fn last(self) -> ParamCode {
		match self {
			ParamKind::Help => ParamCode::Help,
			ParamKind::Action => ParamCode::UserClp,
			ParamKind::String => ParamCode::Solution,
			ParamKind::Keyword => ParamCode::Vector,
			ParamKind::Boolean => ParamCode::SparseFactor,
			ParamKind::Double => ParamCode::ZeroTolerance,
			ParamKind::Integer => ParamCode::Verbose,
		}
	}

	/// Iterates the codes of this kind's band in code order.
	pub fn codes(self) -> impl Iterator<Item = ParamCode> {
		(self.first() as u16..=self.last() as u16).filter_map(ParamCode::from_repr)
	}

	/// Returns true for kinds that carry a value.
	pub const fn has_value(self) -> bool {
		!matches!(self, ParamKind::Help | ParamKind::Action)
	}

	pub const fn name(self) -> &'static str {
		match self {
			ParamKind::Help => "help",
			ParamKind::Action => "action",
			ParamKind::String => "string",
			ParamKind::Keyword => "keyword",
			ParamKind::Boolean => "boolean",
			ParamKind::Double => "double",
			ParamKind::Integer => "integer",
		}
	}
}

impl core::fmt::Display for ParamKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Stable identifier of a registered parameter.
///
/// Variant order is load-bearing: it defines both the band layout and the
/// scan order used by [`ParamRegistry::resolve`](crate::ParamRegistry::resolve).
/// New parameters are appended inside their band; codes are never renumbered
/// at runtime.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	EnumCount,
	EnumIter,
	FromRepr,
	IntoStaticStr,
)]
#[repr(u16)]
pub enum ParamCode {
	// Help
	GeneralQuery,
	FullGeneralQuery,
	Help,

	// Action
	AllSlack,
	Barrier,
	BranchAndCut,
	DualSimplex,
	SolveContinuous,
	EitherSimplex,
	Solve,
	Environment,
	Exit,
	GmplSolution,
	Guess,
	Maximize,
	Minimize,
	NetlibEither,
	NetlibBarrier,
	NetlibDual,
	NetlibPrimal,
	NetlibTune,
	Network,
	OutDuplicateRows,
	Parametrics,
	PlusMinus,
	PrimalSimplex,
	RestoreSolution,
	ReallyScale,
	Reverse,
	Sleep,
	Statistics,
	Tighten,
	UnitTest,
	UserClp,

	// String
	BasisIn,
	BasisOut,
	Directory,
	DirSample,
	DirNetlib,
	DirMiplib,
	Export,
	Import,
	PrintMask,
	RestoreModel,
	SaveModel,
	SaveSolution,
	Solution,

	// Keyword
	CommandPrintLevel,
	BiasLu,
	BarrierScale,
	Cholesky,
	Crash,
	Crossover,
	Direction,
	DualPivot,
	Factorization,
	Gamma,
	Presolve,
	PrimalPivot,
	PrintingOptions,
	Scaling,
	Vector,

	// Boolean
	AutoScale,
	BufferedMode,
	ErrorsAllowed,
	KeepNames,
	Kkt,
	Messages,
	Perturbation,
	Pfi,
	SparseFactor,

	// Double
	DualBound,
	DualTolerance,
	FakeBound,
	ObjectiveScale,
	PresolveTolerance,
	PrimalTolerance,
	PrimalWeight,
	Psi,
	Progress,
	ReallyObjectiveScale,
	RhsScale,
	TimeLimit,
	ZeroTolerance,

	// Integer
	CppGenerate,
	Decompose,
	DenseThreshold,
	Dualize,
	IdiotCrash,
	LogLevel,
	MaxFactor,
	MaxIterations,
	OutputFormat,
	PresolvePasses,
	PerturbValue,
	PrintOptions,
	RandomSeed,
	SlpValue,
	SmallFactorization,
	SpecialOptions,
	SprintCrash,
	Substitution,
	Threads,
	Verbose,
}

impl ParamCode {
	/// Number of parameter slots in every registry.
	pub const COUNT: usize = <Self as EnumCount>::COUNT;

	/// Position of this code in the definition table.
	#[inline]
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Kind of the band this code lives in.
	pub const fn kind(self) -> ParamKind {
		let i = self as u16;
		if i <= ParamKind::Help.last() as u16 {
			ParamKind::Help
		} else if i <= ParamKind::Action.last() as u16 {
			ParamKind::Action
		} else if i <= ParamKind::String.last() as u16 {
			ParamKind::String
		} else if i <= ParamKind::Keyword.last() as u16 {
			ParamKind::Keyword
		} else if i <= ParamKind::Boolean.last() as u16 {
			ParamKind::Boolean
		} else if i <= ParamKind::Double.last() as u16 {
			ParamKind::Double
		} else {
			ParamKind::Integer
		}
	}

	/// All codes in scan order.
	pub fn all() -> impl Iterator<Item = ParamCode> {
		<Self as strum::IntoEnumIterator>::iter()
	}

	/// Rust identifier of the code, for diagnostics.
	pub fn ident(self) -> &'static str {
		self.into()
	}
}

impl TryFrom<u16> for ParamCode {
	type Error = ParamError;

	fn try_from(raw: u16) -> Result<Self, Self::Error> {
		ParamCode::from_repr(raw).ok_or(ParamError::UnknownCode(raw as usize))
	}
}

impl TryFrom<usize> for ParamCode {
	type Error = ParamError;

	fn try_from(index: usize) -> Result<Self, Self::Error> {
		u16::try_from(index)
			.ok()
			.and_then(ParamCode::from_repr)
			.ok_or(ParamError::UnknownCode(index))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bands_are_contiguous_and_cover_every_code() {
		let mut expected = 0u16;
		for kind in ParamKind::ALL {
			assert_eq!(kind.first() as u16, expected, "{kind} band starts late");
			for code in kind.codes() {
				assert_eq!(code.kind(), kind);
				expected += 1;
			}
		}
		assert_eq!(expected as usize, ParamCode::COUNT);
	}

	#[test]
	fn raw_codes_outside_table_are_rejected() {
		assert_eq!(ParamCode::try_from(0u16), Ok(ParamCode::GeneralQuery));
		let past_end = ParamCode::COUNT as u16;
		assert_eq!(
			ParamCode::try_from(past_end),
			Err(ParamError::UnknownCode(past_end as usize))
		);
		assert!(ParamCode::try_from(usize::MAX).is_err());
	}

	#[test]
	fn boolean_is_its_own_band() {
		assert_eq!(ParamCode::KeepNames.kind(), ParamKind::Boolean);
		assert_eq!(ParamCode::Presolve.kind(), ParamKind::Keyword);
		assert!(!ParamKind::Action.has_value());
		assert!(ParamKind::Boolean.has_value());
	}
}
