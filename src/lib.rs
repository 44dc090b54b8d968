//! Classic object-oriented design patterns, each with a canonical and a themed demonstration.
//!
//! The Composite tree in [`structural::composite`] is the centrepiece; every other
//! module is a small, self-contained pattern. Demos return a
//! [`Transcript`](util::transcript::Transcript) instead of printing.

pub mod behavioral;
pub mod catalogue;
pub mod cli;
pub mod config;
pub mod creational;
pub mod errors;
pub mod exitcode;
pub mod structural;
pub mod util;

pub use catalogue::{Demo, Family};
pub use errors::{PatternError, PatternResult};
