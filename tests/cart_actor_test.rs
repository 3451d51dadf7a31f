use chrono::{TimeZone, Utc};
use restaurant_pos::cart_actor::{self, CartContext, CartError, OrderNumbers};
use restaurant_pos::clients::actor_client::ActorClient;
use restaurant_pos::clients::{CartClient, KitchenClient};
use restaurant_pos::clock::ManualClock;
use restaurant_pos::framework::mock::{create_mock_client, expect_create, MockClient};
use restaurant_pos::framework::FrameworkError;
use restaurant_pos::kitchen_actor::KitchenError;
use restaurant_pos::model::{
    CheckoutDetails, KitchenTicket, MenuItem, PaymentMethod, Station, TicketId,
};
use std::sync::Arc;

fn paneer() -> MenuItem {
    MenuItem::new("m2", "Paneer Tikka", "starters", 260.0).with_station(Station::Tandoor)
}

fn biryani() -> MenuItem {
    MenuItem::new("m8", "Veg Biryani", "mains", 240.0)
}

/// Real Cart actor with a mocked Kitchen.
///
/// - Real Cart actor (pricing, checkout routing)
/// - Kitchen requests answered from the test, so ticket payloads can be inspected
#[tokio::test]
async fn test_checkout_routes_lines_to_station_tickets() {
    let (kitchen_generic, mut kitchen_rx) = create_mock_client::<KitchenTicket>(10);
    let kitchen = KitchenClient::new(kitchen_generic, Station::standard());
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).unwrap());

    let (cart_actor, cart_generic) = cart_actor::new(8);
    let carts = CartClient::new(cart_generic);
    let handle = tokio::spawn(cart_actor.run(CartContext {
        kitchen,
        clock: Arc::new(clock.clone()),
        order_numbers: OrderNumbers::starting_at(500),
    }));

    let cart = carts.open_cart(Some("T9".into())).await.unwrap();
    carts.add_item(cart, biryani()).await.unwrap();
    let (line, _) = carts.add_item(cart, paneer()).await.unwrap();
    carts.set_notes(cart, line, Some("No onion".into())).await.unwrap();

    let checkout = {
        let carts = carts.clone();
        tokio::spawn(async move {
            carts
                .checkout(
                    cart,
                    CheckoutDetails {
                        payment_method: PaymentMethod::Wallet,
                        table: Some("T10".into()),
                        customer_phone: None,
                    },
                )
                .await
        })
    };

    let (main, respond) = expect_create(&mut kitchen_rx).await.expect("main kitchen ticket");
    assert_eq!(main.station, Station::MainKitchen);
    assert_eq!(main.order_number, "#500");
    assert_eq!(main.table.as_deref(), Some("T10"));
    respond.send(Ok(TicketId(41))).unwrap();

    let (tandoor, respond) = expect_create(&mut kitchen_rx).await.expect("tandoor ticket");
    assert_eq!(tandoor.station, Station::Tandoor);
    assert_eq!(tandoor.items[0].notes.as_deref(), Some("No onion"));
    respond.send(Ok(TicketId(42))).unwrap();

    let order = checkout.await.unwrap().unwrap();
    assert_eq!(order.tickets, vec![TicketId(41), TicketId(42)]);
    assert_eq!(order.payment.method, PaymentMethod::Wallet);
    assert!((order.totals.subtotal - 500.0).abs() < 1e-6);
    assert!((order.totals.total - 575.0).abs() < 1e-6);
    assert_eq!(order.placed_at, tandoor.created_at.unwrap());

    assert!(carts.get(cart).await.unwrap().unwrap().is_empty());

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_kitchen_failure_keeps_the_cart() {
    let mut kitchen_mock = MockClient::<KitchenTicket>::new();
    kitchen_mock
        .expect_create()
        .return_err(FrameworkError::EntityError(Box::new(KitchenError::EmptyTicket(
            "#700".into(),
        ))));

    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).unwrap());
    let (cart_actor, cart_generic) = cart_actor::new(8);
    let carts = CartClient::new(cart_generic);
    let handle = tokio::spawn(cart_actor.run(CartContext {
        kitchen: KitchenClient::new(kitchen_mock.client(), Station::standard()),
        clock: Arc::new(clock),
        order_numbers: OrderNumbers::starting_at(700),
    }));

    let cart = carts.open_cart(None).await.unwrap();
    carts.add_item(cart, biryani()).await.unwrap();

    let err = carts
        .checkout(cart, CheckoutDetails::default())
        .await
        .unwrap_err();
    assert_eq!(err, CartError::Kitchen(KitchenError::EmptyTicket("#700".into())));

    let kept = carts.get(cart).await.unwrap().unwrap();
    assert_eq!(kept.len(), 1);
    kitchen_mock.verify();

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_retry_after_partial_failure_resends_under_a_new_number() {
    let (kitchen_generic, mut kitchen_rx) = create_mock_client::<KitchenTicket>(10);
    let kitchen = KitchenClient::new(kitchen_generic, Station::standard());
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).unwrap());

    let (cart_actor, cart_generic) = cart_actor::new(8);
    let carts = CartClient::new(cart_generic);
    let handle = tokio::spawn(cart_actor.run(CartContext {
        kitchen,
        clock: Arc::new(clock),
        order_numbers: OrderNumbers::starting_at(800),
    }));

    let cart = carts.open_cart(None).await.unwrap();
    carts.add_item(cart, biryani()).await.unwrap();
    carts.add_item(cart, paneer()).await.unwrap();

    let first = {
        let carts = carts.clone();
        tokio::spawn(async move { carts.checkout(cart, CheckoutDetails::default()).await })
    };
    let (main, respond) = expect_create(&mut kitchen_rx).await.unwrap();
    assert_eq!(main.order_number, "#800");
    respond.send(Ok(TicketId(1))).unwrap();
    let (tandoor, respond) = expect_create(&mut kitchen_rx).await.unwrap();
    assert_eq!(tandoor.order_number, "#800");
    respond
        .send(Err(FrameworkError::EntityError(Box::new(KitchenError::ActorCommunicationError(
            "board offline".into(),
        )))))
        .unwrap();
    assert!(first.await.unwrap().is_err());
    assert_eq!(carts.get(cart).await.unwrap().unwrap().len(), 2);

    let retry = {
        let carts = carts.clone();
        tokio::spawn(async move { carts.checkout(cart, CheckoutDetails::default()).await })
    };
    for id in [2, 3] {
        let (params, respond) = expect_create(&mut kitchen_rx).await.unwrap();
        assert_eq!(params.order_number, "#801");
        respond.send(Ok(TicketId(id))).unwrap();
    }
    let order = retry.await.unwrap().unwrap();
    assert_eq!(order.order_number, "#801");
    assert_eq!(order.tickets, vec![TicketId(2), TicketId(3)]);

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_never_reaches_the_kitchen() {
    let kitchen_mock = MockClient::<KitchenTicket>::new();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).unwrap());

    let (cart_actor, cart_generic) = cart_actor::new(8);
    let carts = CartClient::new(cart_generic);
    let handle = tokio::spawn(cart_actor.run(CartContext {
        kitchen: KitchenClient::new(kitchen_mock.client(), Station::standard()),
        clock: Arc::new(clock),
        order_numbers: OrderNumbers::starting_at(1),
    }));

    let cart = carts.open_cart(None).await.unwrap();
    let line = carts.add_item(cart, paneer()).await.unwrap().0;
    let totals = carts.remove_item(cart, line).await.unwrap();
    assert_eq!(totals.total, 0.0);

    let err = carts.checkout(cart, CheckoutDetails::default()).await.unwrap_err();
    assert_eq!(err, CartError::EmptyCart);
    kitchen_mock.verify();

    drop(carts);
    handle.await.unwrap();
}
