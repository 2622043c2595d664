use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::station::StationTopology;
use crate::tests::fixtures::commands::{DecideBookingBuilder, HOUR, NOW, RequestBookingBuilder};
use crate::tests::fixtures::context::{TestApp, test_app};
use rstest::rstest;

#[tokio::test]
async fn approved_running_booking_occupies_its_port() {
    let TestApp { state, .. } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().port_id(3).build())
        .await
        .unwrap();
    state
        .decide_handler
        .handle(DecideBookingBuilder::new().build())
        .await
        .unwrap();

    let during = state
        .availability_handler
        .handle("st-fixed-0001", NOW + 2 * HOUR + HOUR / 2)
        .await
        .unwrap();
    assert!(during.occupied_ports.contains(&3));
    assert_eq!(during.current_occupied, 1);
    assert!(during.is_available);

    let at_end = state
        .availability_handler
        .handle("st-fixed-0001", NOW + 3 * HOUR)
        .await
        .unwrap();
    assert!(at_end.occupied_ports.is_empty());
}

#[tokio::test]
async fn single_port_station_at_capacity_is_unavailable() {
    let TestApp { deps, state, .. } = test_app().await;
    deps.stations
        .register(StationTopology::new("st-solo", "Solo Charger", "owner-fixed-0001", 1))
        .await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().station_id("st-solo").build())
        .await
        .unwrap();
    state
        .decide_handler
        .handle(
            DecideBookingBuilder::new()
                .station_id("st-solo")
                .actor(Actor::admin("root"))
                .build(),
        )
        .await
        .unwrap();

    let record = state
        .availability_handler
        .handle("st-solo", NOW + 2 * HOUR)
        .await
        .unwrap();
    assert!(!record.is_available);
    assert_eq!(record.current_available, 0);
    assert_eq!(record.current_occupied, 1);
}

#[tokio::test]
async fn expired_pending_booking_is_archived_as_pending() {
    let TestApp { deps, state, relay } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();

    let record = state
        .availability_handler
        .handle("st-fixed-0001", NOW + 3 * HOUR)
        .await
        .unwrap();
    assert_eq!(record.current_available, 4);

    let loaded = deps.store.load("st-fixed-0001").await.unwrap();
    assert!(loaded.state.bookings.is_empty());
    assert!(loaded.state.ports.is_empty());

    relay.run_once().await.unwrap();
    let history = state
        .station_history
        .handle("st-fixed-0001", &Actor::user("owner-fixed-0001"))
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].final_status, BookingStatus::Pending);
    assert_eq!(history[0].start_time, NOW + 2 * HOUR);
}

#[tokio::test]
async fn recomputing_twice_at_the_same_instant_changes_nothing() {
    let TestApp { deps, state, .. } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();
    state
        .request_handler
        .handle(
            RequestBookingBuilder::new()
                .booking_id("bk-later")
                .window(NOW + 5 * HOUR, NOW + 6 * HOUR)
                .build(),
        )
        .await
        .unwrap();

    let instant = NOW + 4 * HOUR;
    let first = state
        .availability_handler
        .handle("st-fixed-0001", instant)
        .await
        .unwrap();
    let after_first = deps.store.load("st-fixed-0001").await.unwrap().state;
    let second = state
        .availability_handler
        .handle("st-fixed-0001", instant)
        .await
        .unwrap();
    let after_second = deps.store.load("st-fixed-0001").await.unwrap().state;

    assert_eq!(first, second);
    assert_eq!(after_first, after_second);
    assert_eq!(after_second.bookings.len(), 1);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(4)]
#[tokio::test]
async fn occupied_and_available_always_add_up(#[case] running: u32) {
    let TestApp { state, .. } = test_app().await;
    for port in 1..=running {
        let booking_id = format!("bk-port-{port}");
        state
            .request_handler
            .handle(
                RequestBookingBuilder::new()
                    .booking_id(&booking_id)
                    .port_id(port)
                    .build(),
            )
            .await
            .unwrap();
        state
            .decide_handler
            .handle(DecideBookingBuilder::new().booking_id(&booking_id).build())
            .await
            .unwrap();
    }

    let record = state
        .availability_handler
        .handle("st-fixed-0001", NOW + 2 * HOUR)
        .await
        .unwrap();
    assert_eq!(record.current_occupied, running);
    assert_eq!(record.current_occupied + record.current_available, record.total_ports);
    assert_eq!(record.is_available, running < record.total_ports);
}
