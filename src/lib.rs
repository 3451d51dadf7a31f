//! # Restaurant POS Core
//!
//! > **Register pricing and a kitchen ticket board, hosted as resource-oriented actors.**
//!
//! Two pieces of state live here: the **carts** being rung up at the register and the
//! **kitchen order tickets** (KOTs) on the kitchen display. Each is owned by a single
//! Tokio task that processes one message at a time, so no lock ever guards a cart or
//! a ticket.
//!
//! ## Core Concepts
//!
//! ### Pure rules, hosted state
//! Pricing ([`pricing::compute_totals`]), ticket transitions
//! ([`KitchenTicket::start`](model::KitchenTicket::start)), elapsed time and staleness, and
//! the station grouping ([`KitchenBoard`](kitchen_actor::KitchenBoard)) are synchronous
//! functions on plain data. The actors only decide *when* they run.
//!
//! ### One loop for every resource
//! `ResourceActor<T: ActorEntity>` is written once and hosts both `Cart` and
//! `KitchenTicket`. Each entity supplies its create payload, its actions and its error enum.
//!
//! ### Injected time
//! Every timestamp comes from a [`Clock`](clock::Clock) in the actor context. Tests drive a
//! [`ManualClock`](clock::ManualClock) to cross the 10 and 15 minute staleness thresholds
//! exactly.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor has its own error enum ([`CartError`](cart_actor::CartError),
//! [`KitchenError`](kitchen_actor::KitchenError)). Entity errors cross the channel boxed in
//! `FrameworkError::EntityError` and the domain clients downcast them back, so callers can
//! `match` on `CartError::EmptyCart` or `KitchenError::InvalidTransition`.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected when an actor is run, not when it is built. The cart's
//! context carries a `KitchenClient`, so checkout can send tickets.
//!
//! ### 3. Observability
//! `tracing` everywhere, with `entity_type` and ids as structured fields. See
//! [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client and test mocks
//! - [`model`]: menu, cart, order and ticket data
//! - [`pricing`]: subtotal, tax, service charge and total
//! - [`cart_actor`], [`kitchen_actor`]: the two hosted resources
//! - [`clients`]: typed wrappers ([`CartClient`](clients::CartClient),
//!   [`KitchenClient`](clients::KitchenClient))
//! - [`config`]: outlet configuration from TOML
//! - [`clock`]: system and manual clocks
//! - [`lifecycle`]: [`PosSystem`](lifecycle::PosSystem) wiring and shutdown
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod framework;
pub mod kitchen_actor;
pub mod lifecycle;
pub mod model;
pub mod pricing;
