use actor_framework::ActorClient;
use chrono::NaiveDate;
use order_tracker::config::TrackerConfig;
use order_tracker::lifecycle::OrderSystem;
use order_tracker::model::{
    seed_orders, Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate,
};
use order_tracker::order_actor::OrderError;
use order_tracker::store::OrderStore;

fn system() -> OrderSystem {
    OrderSystem::new(&TrackerConfig::default().without_latency())
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn ids(orders: &[Order]) -> Vec<String> {
    orders.iter().map(|o| o.id.to_string()).collect()
}

fn new_order(company: &str) -> OrderCreate {
    OrderCreate {
        company_name: company.to_string(),
        product_name: "Écran Dell UltraSharp".to_string(),
        total_products: 6,
        shipped_products: 0,
        created_at: date("2025-04-22"),
        estimated_delivery_date: date("2025-05-22"),
        status: OrderStatus::Pending,
    }
}

/// Full end-to-end test through the real actor: the seed data, every store operation
/// and a clean shutdown.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = system();
    let store = system.store();

    assert_eq!(store.list().await.unwrap(), seed_orders());

    let created = store.create(new_order("Nordic Data")).await.unwrap();
    assert_eq!(created.id.to_string(), "CMD-006");
    assert_eq!(created.company_name, "Nordic Data");

    let updated = store
        .update(created.id, OrderUpdate::status(OrderStatus::Partial))
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Partial);

    store.delete(created.id).await.unwrap();
    assert_eq!(ids(&store.list().await.unwrap()).len(), 5);

    drop(store);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_filtered_list_is_a_matching_subset() {
    let system = system();
    let store = system.store();
    let all = store.list().await.unwrap();

    let filters = [
        OrderFilter::status(OrderStatus::Partial),
        OrderFilter::company("tech"),
        OrderFilter::created_between(Some(date("2025-04-10")), Some(date("2025-04-18"))),
        OrderFilter {
            company_name: Some("SOLUTIONS".to_string()),
            status: Some(OrderStatus::Partial),
            ..OrderFilter::default()
        },
    ];
    for filter in filters {
        let subset = store.list_filtered(filter.clone()).await.unwrap();
        assert!(subset.iter().all(|order| all.contains(order)));
        assert!(subset.iter().all(|order| filter.matches(order)));
        let expected: Vec<&Order> = all.iter().filter(|o| filter.matches(o)).collect();
        assert_eq!(subset.iter().collect::<Vec<_>>(), expected, "{filter:?}");
    }

    assert_eq!(
        store.list_filtered(OrderFilter::default()).await.unwrap(),
        all
    );
    assert_eq!(
        ids(&store
            .list_filtered(OrderFilter::status(OrderStatus::Partial))
            .await
            .unwrap()),
        ["CMD-001", "CMD-005"]
    );
    assert_eq!(
        ids(&store.list_filtered(OrderFilter::company("tech")).await.unwrap()),
        ["CMD-001", "CMD-002", "CMD-004"]
    );
}

#[tokio::test]
async fn test_created_ids_are_never_reused() {
    let system = system();
    let store = system.store();

    // Deleting the newest record must not free its number.
    store.delete(OrderId(5)).await.unwrap();
    let first = store.create(new_order("Acme")).await.unwrap();
    let second = store.create(new_order("Globex")).await.unwrap();
    assert_eq!(first.id, OrderId(6));
    assert_eq!(second.id, OrderId(7));

    let listed = store.list().await.unwrap();
    assert_eq!(
        ids(&listed),
        ["CMD-001", "CMD-002", "CMD-003", "CMD-004", "CMD-006", "CMD-007"]
    );
    assert_eq!(listed.iter().filter(|o| o.id == first.id).count(), 1);
}

#[tokio::test]
async fn test_update_status_keeps_other_fields() {
    let system = system();
    let store = system.store();
    let before = store.list().await.unwrap();

    store
        .update(OrderId(3), OrderUpdate::status(OrderStatus::Completed))
        .await
        .unwrap();

    let after = store.list().await.unwrap();
    for (old, new) in before.iter().zip(&after) {
        if old.id == OrderId(3) {
            assert_eq!(new.status, OrderStatus::Completed);
            assert_eq!(
                Order {
                    status: old.status,
                    ..new.clone()
                },
                *old
            );
        } else {
            assert_eq!(new, old);
        }
    }
}

#[tokio::test]
async fn test_unknown_ids_fail_without_changes() {
    let system = system();
    let store = system.store();

    let err = store
        .update(OrderId(99), OrderUpdate::status(OrderStatus::Completed))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::not_found(OrderId(99)));

    let err = store.delete(OrderId(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "Order with ID CMD-099 not found");

    assert_eq!(store.list().await.unwrap(), seed_orders());
}

#[tokio::test]
async fn test_empty_system_starts_at_first_id() {
    let config = TrackerConfig {
        seed_demo_data: false,
        ..TrackerConfig::default().without_latency()
    };
    let system = OrderSystem::new(&config);

    assert!(system.store().list().await.unwrap().is_empty());
    let created = system.store().create(new_order("Initech")).await.unwrap();
    assert_eq!(created.id.to_string(), "CMD-001");

    let fetched = system.order_client.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}
