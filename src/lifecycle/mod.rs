//! # System Lifecycle & Orchestration
//!
//! Starts the Cart and Kitchen actors, wires the cart's checkout to the kitchen, and shuts
//! both down in dependency order.
//!
//! - [`PosSystem`] - owns the clients and actor task handles
//! - [`setup_tracing`] - initializes logging

pub mod pos_system;
pub mod tracing;

pub use self::pos_system::*;
pub use self::tracing::*;
