use super::*;

use crate::db::DbService;
use crate::db::models::{OrderItemCreate, OrderStatus};

async fn create_test_service() -> OrderService {
    let db = DbService::in_memory().await.unwrap();
    OrderService::new(db.db)
}

fn sample_items() -> Vec<OrderItemCreate> {
    vec![
        item("Laptop", 1, 1200.0),
        item("Mouse", 2, 25.0),
    ]
}

fn item(name: &str, quantity: i32, price: f64) -> OrderItemCreate {
    OrderItemCreate {
        name: name.to_string(),
        quantity,
        price,
    }
}

// ========================================================================
// Creation
// ========================================================================

#[tokio::test]
async fn test_create_order() {
    let service = create_test_service().await;

    let order = service.create_order(sample_items()).await.unwrap();

    assert!(!order.id.is_empty());
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "Laptop");
    assert_eq!(order.items[0].quantity, 1);
    assert_eq!(order.items[0].price, 1200.0);
    assert_eq!(order.items[1].name, "Mouse");
    assert_eq!(order.items[1].quantity, 2);
    assert_eq!(order.items[1].price, 25.0);
    assert_eq!(order.total_price, 1250.0);
}

#[tokio::test]
async fn test_create_order_empty_items() {
    let service = create_test_service().await;

    let order = service.create_order(vec![]).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.items.is_empty());
    assert_eq!(order.total_price, 0.0);
}

#[tokio::test]
async fn test_create_order_accepts_unvalidated_values() {
    // Negative quantities and prices pass through untouched
    let service = create_test_service().await;

    let order = service
        .create_order(vec![item("Refund line", -1, 10.0), item("Oddity", 2, -5.0)])
        .await
        .unwrap();

    assert_eq!(order.items[0].quantity, -1);
    assert_eq!(order.items[1].price, -5.0);
    assert_eq!(order.total_price, -20.0);
}

// ========================================================================
// Lookup
// ========================================================================

#[tokio::test]
async fn test_get_order_round_trip() {
    let service = create_test_service().await;

    let created = service.create_order(sample_items()).await.unwrap();
    let fetched = service.get_order(&created.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.status, created.status);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.items.len(), created.items.len());
    assert_eq!(fetched.total_price, created.total_price);
}

#[tokio::test]
async fn test_not_found_contract() {
    let service = create_test_service().await;

    assert!(service.get_order("missing").await.unwrap().is_none());
    assert!(
        !service
            .update_status("missing", OrderStatus::Shipped)
            .await
            .unwrap()
    );
    assert!(!service.cancel_order("missing").await.unwrap());
}

#[tokio::test]
async fn test_list_orders_with_filter() {
    let service = create_test_service().await;

    let a = service.create_order(sample_items()).await.unwrap();
    let b = service.create_order(vec![item("Keyboard", 1, 80.0)]).await.unwrap();
    let _c = service.create_order(vec![]).await.unwrap();

    service
        .update_status(&a.id, OrderStatus::Shipped)
        .await
        .unwrap();
    service.cancel_order(&b.id).await.unwrap();

    let all = service.list_orders(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let shipped = service
        .list_orders(Some(OrderStatus::Shipped))
        .await
        .unwrap();
    assert_eq!(shipped.len(), 1);
    assert_eq!(shipped[0].id, a.id);

    let pending = service
        .list_orders(Some(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let delivered = service
        .list_orders(Some(OrderStatus::Delivered))
        .await
        .unwrap();
    assert!(delivered.is_empty());
}

// ========================================================================
// Status transitions
// ========================================================================

#[tokio::test]
async fn test_update_status_is_unconditional() {
    let service = create_test_service().await;
    let order = service.create_order(sample_items()).await.unwrap();

    // Forward
    assert!(
        service
            .update_status(&order.id, OrderStatus::Shipped)
            .await
            .unwrap()
    );
    // Backward
    assert!(
        service
            .update_status(&order.id, OrderStatus::Pending)
            .await
            .unwrap()
    );
    // Self-transition
    assert!(
        service
            .update_status(&order.id, OrderStatus::Pending)
            .await
            .unwrap()
    );
    // Out of a terminal state
    assert!(
        service
            .update_status(&order.id, OrderStatus::Canceled)
            .await
            .unwrap()
    );
    assert!(
        service
            .update_status(&order.id, OrderStatus::Delivered)
            .await
            .unwrap()
    );

    let fetched = service.get_order(&order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn test_cancel_pending_order() {
    let service = create_test_service().await;
    let order = service.create_order(sample_items()).await.unwrap();

    assert!(service.cancel_order(&order.id).await.unwrap());

    let fetched = service.get_order(&order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Canceled);

    // Already CANCELED, no longer PENDING
    assert!(!service.cancel_order(&order.id).await.unwrap());
}

#[tokio::test]
async fn test_cancel_rejects_non_pending() {
    let service = create_test_service().await;

    for status in [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ] {
        let order = service.create_order(sample_items()).await.unwrap();
        service.update_status(&order.id, status).await.unwrap();

        assert!(!service.cancel_order(&order.id).await.unwrap());

        // Status untouched by the failed cancel
        let fetched = service.get_order(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, status);
    }
}

// ========================================================================
// Sweeper
// ========================================================================

#[tokio::test]
async fn test_advance_pending_orders_empty() {
    let service = create_test_service().await;

    let advanced = service.advance_pending_orders().await.unwrap();
    assert_eq!(advanced, 0);
}

#[tokio::test]
async fn test_advance_pending_orders_bulk() {
    let service = create_test_service().await;

    let a = service.create_order(sample_items()).await.unwrap();
    let b = service.create_order(vec![item("Keyboard", 1, 80.0)]).await.unwrap();
    let c = service.create_order(vec![]).await.unwrap();

    service
        .update_status(&b.id, OrderStatus::Shipped)
        .await
        .unwrap();
    service.cancel_order(&c.id).await.unwrap();

    let advanced = service.advance_pending_orders().await.unwrap();
    assert_eq!(advanced, 1);

    let a = service.get_order(&a.id).await.unwrap().unwrap();
    let b = service.get_order(&b.id).await.unwrap().unwrap();
    let c = service.get_order(&c.id).await.unwrap().unwrap();
    assert_eq!(a.status, OrderStatus::Processing);
    assert_eq!(b.status, OrderStatus::Shipped);
    assert_eq!(c.status, OrderStatus::Canceled);

    // Second sweep finds nothing PENDING
    let advanced = service.advance_pending_orders().await.unwrap();
    assert_eq!(advanced, 0);
}

#[tokio::test]
async fn test_sweeper_advances_on_tick_and_stops_on_shutdown() {
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    let service = create_test_service().await;
    let order = service.create_order(sample_items()).await.unwrap();

    let shutdown = CancellationToken::new();
    let sweeper = OrderSweeper::new(
        service.clone(),
        Duration::from_millis(50),
        shutdown.clone(),
    );
    let handle = tokio::spawn(sweeper.run());

    // First sweep fires one period after start
    tokio::time::sleep(Duration::from_millis(300)).await;

    let fetched = service.get_order(&order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Processing);

    shutdown.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("sweeper did not stop after shutdown")
        .unwrap();
}

// ========================================================================
// Full lifecycle scenario
// ========================================================================

#[tokio::test]
async fn test_order_lifecycle_scenario() {
    let service = create_test_service().await;

    let order = service.create_order(sample_items()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total_price, 1250.0);

    assert!(service.cancel_order(&order.id).await.unwrap());
    let fetched = service.get_order(&order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Canceled);

    assert!(!service.cancel_order(&order.id).await.unwrap());
}
