use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Shipment {
    id: u32,
    carrier: String,
    parcels: u32,
}

#[derive(Debug)]
struct ShipmentCreate {
    carrier: String,
    parcels: u32,
}

#[derive(Debug)]
struct ShipmentUpdate {
    parcels: Option<u32>,
}

#[derive(Debug)]
struct ShipmentFilter {
    carrier: String,
}

#[derive(Debug, thiserror::Error)]
enum ShipmentError {
    #[error("a shipment needs at least one parcel")]
    Empty,
}

#[async_trait]
impl ActorEntity for Shipment {
    type Id = u32;
    type Create = ShipmentCreate;
    type Update = ShipmentUpdate;
    type Filter = ShipmentFilter;
    type Context = ();
    type Error = ShipmentError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: ShipmentCreate) -> Result<Self, Self::Error> {
        if params.parcels == 0 {
            return Err(ShipmentError::Empty);
        }
        Ok(Self {
            id,
            carrier: params.carrier,
            parcels: params.parcels,
        })
    }

    fn matches(&self, filter: &ShipmentFilter) -> bool {
        self.carrier == filter.carrier
    }

    async fn on_update(
        &mut self,
        update: ShipmentUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(parcels) = update.parcels {
            // Apply first so the test can prove a failed hook is rolled back.
            self.parcels = parcels;
            if parcels == 0 {
                return Err(ShipmentError::Empty);
            }
        }
        Ok(())
    }
}

fn shipment(id: u32, carrier: &str, parcels: u32) -> Shipment {
    Shipment {
        id,
        carrier: carrier.to_string(),
        parcels,
    }
}

fn create(carrier: &str, parcels: u32) -> ShipmentCreate {
    ShipmentCreate {
        carrier: carrier.to_string(),
        parcels,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let created: Shipment = client.create(create("DHL", 3)).await.unwrap();
    let id = created.id;
    assert_eq!(id, 1); // First ID should be 1

    // 2. Get
    let fetched: Shipment = client.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.parcels, 3);

    // 3. Update
    let updated = client
        .update(id, ShipmentUpdate { parcels: Some(4) })
        .await
        .unwrap();
    assert_eq!(updated.parcels, 4);

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(client.list(None).await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order_and_filters() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));

    for (carrier, parcels) in [("UPS", 1), ("DHL", 2), ("UPS", 3)] {
        client.create(create(carrier, parcels)).await.unwrap();
    }

    let all = client.list(None).await.unwrap();
    let ids: Vec<u32> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let ups = client
        .list(Some(ShipmentFilter {
            carrier: "UPS".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(ups, vec![shipment(1, "UPS", 1), shipment(3, "UPS", 3)]);
}

#[tokio::test]
async fn test_seeded_actor_continues_counter_and_never_reuses_ids() {
    let seed = vec![shipment(10, "UPS", 1), shipment(11, "DHL", 2)];
    let (actor, client) = ResourceActor::with_entities(10, seed, 12);
    tokio::spawn(actor.run(()));

    client.delete(11).await.unwrap();
    let created = client.create(create("FedEx", 5)).await.unwrap();
    assert_eq!(created, shipment(12, "FedEx", 5));

    let ids: Vec<u32> = client
        .list(None)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![10, 12]);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found_and_leave_state_alone() {
    let (actor, client) = ResourceActor::with_entities(10, vec![shipment(1, "UPS", 1)], 2);
    tokio::spawn(actor.run(()));

    let err = client
        .update(99, ShipmentUpdate { parcels: Some(2) })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "99"));

    let err = client.delete(99).await.unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(client.list(None).await.unwrap(), vec![shipment(1, "UPS", 1)]);
}

#[tokio::test]
async fn test_failed_hooks_do_not_modify_store() {
    let (actor, client) = ResourceActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create("UPS", 0)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let id = client.create(create("UPS", 2)).await.unwrap().id;
    let err = client
        .update(id, ShipmentUpdate { parcels: Some(0) })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Entity error: a shipment needs at least one parcel");

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.parcels, 2);
}
