//! Generic actor framework hosting the POS state.
//!
//! This module provides the building blocks for type-safe actors that own a store of
//! entities and expose CRUD, listing, and custom actions over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that hosted types (carts, kitchen tickets) implement
//! - [`ResourceActor`] - Generic actor that owns the entity store
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
