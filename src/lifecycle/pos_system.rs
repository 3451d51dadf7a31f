use crate::cart_actor::{self, CartContext, OrderNumbers};
use crate::clients::{CartClient, KitchenClient};
use crate::clock::Clock;
use crate::config::PosConfig;
use crate::kitchen_actor::{self, KitchenBoard, KitchenContext, KitchenError};
use crate::model::Menu;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for one outlet's register and kitchen.
///
/// `PosSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Cart and Kitchen actors
/// - **Dependency Wiring**: The Cart actor gets a `KitchenClient` for checkout
/// - **Shared Resources**: The clock and the order number sequence
///
/// # Example
///
/// ```ignore
/// let system = PosSystem::new(&PosConfig::default(), Arc::new(SystemClock));
///
/// let cart = system.cart_client.open_cart(Some("T1".into())).await?;
/// system.cart_client.add_item(cart, naan).await?;
/// let order = system.cart_client.checkout(cart, CheckoutDetails::default()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct PosSystem {
    /// Client for the register's carts
    pub cart_client: CartClient,

    /// Client for the kitchen ticket board
    pub kitchen_client: KitchenClient,

    /// The outlet's catalog
    pub menu: Menu,

    clock: Arc<dyn Clock>,

    /// Actor task handles, in shutdown order (carts before kitchen)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PosSystem {
    /// Spawns both actors. Must be called inside a Tokio runtime.
    ///
    /// The kitchen starts first since the cart context holds a client to it.
    pub fn new(config: &PosConfig, clock: Arc<dyn Clock>) -> Self {
        let buffer_size = config.actors.buffer_size;

        let (kitchen_actor, kitchen_generic) = kitchen_actor::new(buffer_size);
        let kitchen_client = KitchenClient::new(kitchen_generic, config.kitchen.stations.clone());
        let kitchen_handle = tokio::spawn(kitchen_actor.run(KitchenContext {
            clock: clock.clone(),
        }));

        let (cart_actor, cart_generic) = cart_actor::new(buffer_size);
        let cart_client = CartClient::new(cart_generic);
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            kitchen: kitchen_client.clone(),
            clock: clock.clone(),
            order_numbers: OrderNumbers::starting_at(config.kitchen.first_order_number),
        }));

        info!(
            outlet = %config.outlet.name,
            stations = config.kitchen.stations.len(),
            menu_items = config.menu.len(),
            "POS system started"
        );

        Self {
            cart_client,
            kitchen_client,
            menu: config.menu(),
            clock,
            handles: vec![cart_handle, kitchen_handle],
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// The kitchen board as of the system clock's current time.
    pub async fn kitchen_board(&self) -> Result<KitchenBoard, KitchenError> {
        self.kitchen_client.board(self.clock.now()).await
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels. The Cart actor exits first and drops its
    /// context, which releases the last `KitchenClient` so the Kitchen actor can exit too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down POS system...");

        drop(self.cart_client);
        drop(self.kitchen_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("POS system shutdown complete.");
        Ok(())
    }
}
