//! Demo: one dine-in order from the register to the pass.
//!
//! 1. Load the outlet config and start the [`PosSystem`].
//! 2. Ring up a cart and take payment.
//! 3. Cook the tickets and log the kitchen board.

use restaurant_pos::clock::SystemClock;
use restaurant_pos::config::PosConfig;
use restaurant_pos::kitchen_actor::StationTab;
use restaurant_pos::lifecycle::{setup_tracing, PosSystem};
use restaurant_pos::model::{CategoryFilter, CheckoutDetails, PaymentMethod};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PosConfig::load();
    let system = PosSystem::new(&config, Arc::new(SystemClock));
    let carts = &system.cart_client;

    let span = tracing::info_span!("register");
    let order = async {
        let cart = carts
            .open_cart(Some("T4".to_string()))
            .await
            .map_err(|e| e.to_string())?;

        for item in system.menu.filter(&CategoryFilter::All, "").into_iter().take(4) {
            let (line, totals) = carts
                .add_item(cart, item.clone())
                .await
                .map_err(|e| e.to_string())?;
            info!(item = %item.name, %line, subtotal = totals.subtotal, "Added to cart");
        }

        let totals = carts.totals(cart).await.map_err(|e| e.to_string())?;
        let gst = totals.gst_split();
        info!(
            subtotal = totals.subtotal,
            cgst = gst.cgst,
            sgst = gst.sgst,
            service_charge = totals.service_charge,
            total = totals.total,
            "Bill"
        );

        carts
            .checkout(
                cart,
                CheckoutDetails {
                    payment_method: PaymentMethod::Card,
                    table: None,
                    customer_phone: Some("9876543210".to_string()),
                },
            )
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_number = %order.order_number, tickets = order.tickets.len(), "Order sent to kitchen");

    let span = tracing::info_span!("kitchen");
    async {
        let kitchen = &system.kitchen_client;
        for (i, id) in order.tickets.iter().enumerate() {
            kitchen.start(*id).await.map_err(|e| e.to_string())?;
            if i == 0 {
                kitchen.mark_ready(*id).await.map_err(|e| e.to_string())?;
            }
        }

        let board = system.kitchen_board().await.map_err(|e| e.to_string())?;
        for (tab, count) in board.counts() {
            info!(tab, count, "Board tab");
        }
        for (status, count) in board.status_counts() {
            info!(%status, count, "Board status");
        }
        let all = board.tab(&StationTab::All).map(|tab| tab.tickets.as_slice()).unwrap_or_default();
        for view in all {
            info!(
                ticket = %view.ticket.id,
                station = %view.ticket.station,
                status = %view.ticket.status,
                elapsed_minutes = view.elapsed_minutes,
                border = view.staleness.color(),
                "Ticket"
            );
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
