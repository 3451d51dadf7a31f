use chrono::{Duration, TimeZone, Utc};
use restaurant_pos::cart_actor::CartError;
use restaurant_pos::clients::actor_client::ActorClient;
use restaurant_pos::clock::{Clock, ManualClock};
use restaurant_pos::config::PosConfig;
use restaurant_pos::kitchen_actor::{KitchenError, StationTab};
use restaurant_pos::lifecycle::PosSystem;
use restaurant_pos::model::{
    CheckoutDetails, MenuItemId, PaymentMethod, Staleness, Station, TicketId, TicketStatus,
};
use std::sync::Arc;

fn start_system() -> (PosSystem, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap());
    let system = PosSystem::new(&PosConfig::default(), Arc::new(clock.clone()));
    (system, clock)
}

/// Full end-to-end test with both real actors: ring up, check out, cook, and watch the
/// board age.
#[tokio::test]
async fn test_order_flows_from_register_to_board() {
    let (system, clock) = start_system();
    let carts = &system.cart_client;
    let chicken = system.menu.get(&MenuItemId::from("m1")).unwrap().clone();
    let naan = system.menu.get(&MenuItemId::from("m4")).unwrap().clone();

    let cart = carts.open_cart(Some("T2".into())).await.unwrap();
    let (chicken_line, _) = carts.add_item(cart, chicken.clone()).await.unwrap();
    carts.add_item(cart, chicken).await.unwrap();
    let (naan_line, _) = carts.add_item(cart, naan).await.unwrap();
    carts.set_notes(cart, chicken_line, Some("Less oil".into())).await.unwrap();

    let totals = carts.set_quantity(cart, naan_line, 3).await.unwrap();
    assert!((totals.subtotal - 820.0).abs() < 1e-6);
    assert!((totals.tax - 41.0).abs() < 1e-6);
    assert!((totals.service_charge - 82.0).abs() < 1e-6);
    assert!((totals.total - 943.0).abs() < 1e-6);

    let order = carts
        .checkout(
            cart,
            CheckoutDetails {
                payment_method: PaymentMethod::Cash,
                table: None,
                customer_phone: Some("9000000001".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(order.order_number, "#1024");
    assert_eq!(order.table.as_deref(), Some("T2"));
    assert_eq!(order.payment.amount, order.totals.total);
    assert_eq!(order.tickets.len(), 2);

    // The cart stays open but empty.
    let emptied = carts.get(cart).await.unwrap().unwrap();
    assert!(emptied.is_empty());
    assert_eq!(carts.totals(cart).await.unwrap().total, 0.0);

    let kitchen = &system.kitchen_client;
    let tickets = kitchen.tickets().await.unwrap();
    assert_eq!(tickets[0].station, Station::MainKitchen);
    assert_eq!(tickets[0].items[0].quantity, 2);
    assert_eq!(tickets[0].items[0].notes.as_deref(), Some("Less oil"));
    assert_eq!(tickets[1].station, Station::Tandoor);
    assert_eq!(tickets[1].items[0].quantity, 3);

    clock.advance(Duration::minutes(3));
    let started = kitchen.start(order.tickets[0]).await.unwrap();
    assert_eq!(started, clock.now());

    clock.advance(Duration::minutes(7));
    let board = system.kitchen_board().await.unwrap();
    let all = board.tab(&StationTab::All).unwrap();
    assert_eq!(all.count(), 2);
    assert!(all.tickets.iter().all(|v| v.elapsed_minutes == 10));
    assert!(all.tickets.iter().all(|v| v.staleness == Staleness::Warning));
    assert_eq!(all.tickets[0].ticket.status, TicketStatus::InProgress);

    clock.advance(Duration::minutes(6));
    kitchen.mark_ready(order.tickets[0]).await.unwrap();
    let board = system.kitchen_board().await.unwrap();
    let main = board.tab(&StationTab::Station(Station::MainKitchen)).unwrap();
    assert_eq!(main.tickets[0].staleness, Staleness::Critical);
    assert_eq!(main.tickets[0].ticket.status, TicketStatus::Ready);
    assert!(main.tickets[0].ticket.ready_at.is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_checkout_is_rejected_and_numbers_are_not_consumed() {
    let (system, _clock) = start_system();
    let carts = &system.cart_client;

    let empty = carts.open_cart(None).await.unwrap();
    let err = carts
        .checkout(empty, CheckoutDetails::default())
        .await
        .unwrap_err();
    assert_eq!(err, CartError::EmptyCart);

    let lassi = system.menu.get(&MenuItemId::from("m7")).unwrap().clone();
    let cart = carts.open_cart(None).await.unwrap();
    carts.add_item(cart, lassi).await.unwrap();
    let order = carts.checkout(cart, CheckoutDetails::default()).await.unwrap();

    assert_eq!(order.order_number, "#1024");
    assert_eq!(order.payment.method, PaymentMethod::Upi);
    assert_eq!(system.kitchen_client.tickets().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_transitions_are_guarded_end_to_end() {
    let (system, _clock) = start_system();
    let carts = &system.cart_client;
    let kitchen = &system.kitchen_client;

    let jamun = system.menu.get(&MenuItemId::from("m6")).unwrap().clone();
    let cart = carts.open_cart(None).await.unwrap();
    carts.add_item(cart, jamun).await.unwrap();
    let order = carts.checkout(cart, CheckoutDetails::default()).await.unwrap();
    let ticket = order.tickets[0];

    let err = kitchen.mark_ready(ticket).await.unwrap_err();
    assert!(matches!(
        err,
        KitchenError::InvalidTransition {
            from: TicketStatus::Pending,
            to: TicketStatus::Ready,
            ..
        }
    ));

    kitchen.start(ticket).await.unwrap();
    assert!(kitchen.start(ticket).await.is_err());
    let current = kitchen.get(ticket).await.unwrap().unwrap();
    assert_eq!(current.status, TicketStatus::InProgress);

    let missing = kitchen.start(TicketId(99)).await.unwrap_err();
    assert_eq!(missing, KitchenError::NotFound("kot_99".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_set_table_and_delete_cart() {
    let (system, _clock) = start_system();
    let carts = &system.cart_client;

    let cart = carts.open_cart(None).await.unwrap();
    let updated = carts.set_table(cart, Some("Patio 1".into())).await.unwrap();
    assert_eq!(updated.table.as_deref(), Some("Patio 1"));

    carts.delete(cart).await.unwrap();
    assert!(carts.get(cart).await.unwrap().is_none());
    assert!(matches!(
        carts.totals(cart).await.unwrap_err(),
        CartError::NotFound(_)
    ));

    system.shutdown().await.unwrap();
}
