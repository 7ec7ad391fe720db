//! Pressflow resource requirement and resolution framework
//!
//! The machinery behind every `press ... create` command: resource
//! definitions declare an ordered list of requirements, each
//! requirement produces one value from pre-seeded state, command input
//! or an interactive prompt, and the orchestrator walks the chain
//! before handing the accumulated values to the platform API. Lookups
//! and creations are interchangeable behind the `Resolvable` /
//! `Provisionable` split, so "use a network" can transparently become
//! "create the first network".

pub mod console;
pub mod context;
pub mod credentials;
pub mod definition;
pub mod error;
pub mod provisioner;
pub mod requirement;

pub use console::{CommandInput, Interaction, Output, TerminalPrompt};
pub use context::Context;
pub use error::{CoreError, Result};

#[cfg(test)]
pub(crate) mod testing;
