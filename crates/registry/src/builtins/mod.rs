//! Builtin parameter tables.
//!
//! One pass per kind band. Each pass sets up every code of its band; passes
//! for valued kinds also assign the band push function up front, the way the
//! finishing pass would, so a pass can later override single codes.

mod actions;
mod booleans;
mod doubles;
mod help;
mod integers;
mod keywords;
mod strings;

pub use actions::register_actions;
pub use booleans::register_booleans;
pub use doubles::register_doubles;
pub use help::register_help;
pub use integers::register_integers;
pub use keywords::register_keywords;
pub use strings::register_strings;

use crate::builder::RegistryBuilder;

/// Runs every builtin kind pass.
pub fn register_all(b: &mut RegistryBuilder) {
	register_strings(b);
	register_help(b);
	register_actions(b);
	register_keywords(b);
	register_doubles(b);
	register_integers(b);
	register_booleans(b);
}

/// Largest finite double, used for open bounds.
pub const DBL_MAX: f64 = f64::MAX;
/// Largest integer, used for open bounds.
pub const INT_MAX: i32 = i32::MAX;
