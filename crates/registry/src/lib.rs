//! Parameter registry and abbreviation dispatch for the pivot solver shell.
//!
//! Every tunable of the solver is a parameter with a name pattern such as
//! `dualS!implex`: the part before `!` is the shortest accepted abbreviation.
//! The registry resolves typed tokens to parameters, validates and stores
//! values per kind, and forwards committed values to an attached [`Engine`].
//!
//! # Building
//!
//! [`ParamRegistry::new`] runs the builtin kind passes from [`builtins`].
//! Custom tables go through [`RegistryBuilder`]: every [`ParamCode`] is set up
//! exactly once by the pass for its kind, then [`RegistryBuilder::finish`]
//! links the table.
//!
//! # Example
//!
//! ```
//! use pivot_registry::{ParamCode, ParamRegistry};
//!
//! let mut reg = ParamRegistry::new()?;
//! let code = reg.lookup("maxIt")?;
//! assert_eq!(code, ParamCode::MaxIterations);
//! reg.commit(code, "500")?;
//! assert_eq!(reg.integer(code), Some(500));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builtins;
pub mod config;

mod builder;
mod code;
mod def;
mod error;
mod help;
mod matcher;
mod pattern;
mod push;
mod registry;
mod value;

pub use builder::{RegistryBuilder, Setup};
pub use code::{ParamCode, ParamKind};
pub use config::{Config, ConfigError, ConfigWarning, RegistryConfig, SettingValue};
pub use def::{DisplayPriority, KeywordEntry, ParamDefinition, ParamPayload};
pub use error::{EngineError, ParamError, PushError, RegistryError};
pub use help::{HelpEntry, ListingLevel, SUGGEST_DISTANCE, ValueDomain};
pub use matcher::{CaseSensitivity, MatchKind, NameMatcher, PrefixMatcher, Resolution, scan};
pub use pattern::{MARKER, NamePattern};
pub use push::{Engine, PushFunction};
pub use registry::ParamRegistry;
pub use value::ParamValue;
