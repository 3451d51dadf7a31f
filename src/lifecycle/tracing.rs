//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor loop tags each
//! line with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown with final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions
//! - **Client Calls**: `#[instrument]` spans on every client method
//! - **Checkout**: order number, ticket count and total for each placed order
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show payloads (ticket contents, cart actions)
//! RUST_LOG=debug cargo run
//!
//! # Only the framework loop
//! RUST_LOG=restaurant_pos::framework=debug cargo run
//! ```
//!
//! ## Checkout Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO checkout: Checking out id=CartId(1)
//! INFO Created entity_type="KitchenTicket" id=kot_1 size=1
//! INFO Created entity_type="KitchenTicket" id=kot_2 size=2
//! INFO Order placed cart_id=cart_1 order_number="#1024" tickets=2 total=943.0
//! INFO Action ok entity_type="Cart" id=cart_1
//! ```
//!
//! Actor-side lines carry no client span: they are logged from the actor's own task.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
