//! Rule configuration.
//!
//! `RuleSet` selects the war-resolution policy, the deck composition and
//! the speed-war trigger. It is read-only once a game starts.

pub mod ruleset;

pub use ruleset::{RuleSet, WarPolicy};
