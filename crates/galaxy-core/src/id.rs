//! Identifier generation
//!
//! Ids are lowercase ULIDs with a short kind prefix, so they sort by creation
//! time and are recognisable in CLI output.

use ulid::Ulid;

/// Prefix for user ids
pub const USER_PREFIX: &str = "usr";
/// Prefix for idea ids
pub const IDEA_PREFIX: &str = "ida";
/// Prefix for constellation ids
pub const CONSTELLATION_PREFIX: &str = "con";

/// Generate a new id with the given prefix
pub fn generate(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}
