use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::core::notifications::NotificationKind;
use crate::modules::bookings::core::station::StationTopology;
use crate::modules::bookings::use_cases::decide_booking::command::Verdict;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::tests::fixtures::commands::{
    CancelBookingBuilder, DecideBookingBuilder, HOUR, NOW, RequestBookingBuilder,
};
use crate::tests::fixtures::context::{TestApp, test_app};

const SOLO: &str = "st-solo";

async fn solo_station_app() -> TestApp {
    let app = test_app().await;
    app.deps
        .stations
        .register(StationTopology::new(SOLO, "Solo Charger", "owner-fixed-0001", 1))
        .await;
    app
}

#[tokio::test]
async fn single_port_station_rejects_overlap_but_accepts_touching_windows() {
    let TestApp { deps, state, .. } = solo_station_app().await;
    let at = |id: &str, from: i64, to: i64| {
        RequestBookingBuilder::new()
            .booking_id(id)
            .station_id(SOLO)
            .window(NOW + from * HOUR, NOW + to * HOUR)
            .build()
    };

    state.request_handler.handle(at("bk-10-12", 10, 12)).await.unwrap();

    let overlapping = state.request_handler.handle(at("bk-11-13", 11, 13)).await;
    assert!(matches!(
        overlapping,
        Err(ApplicationError::Domain(DecideError::Conflict {
            port_id: 1,
            ref conflicting_booking_id,
        })) if conflicting_booking_id == "bk-10-12"
    ));

    let touching = state.request_handler.handle(at("bk-12-13", 12, 13)).await;
    assert_eq!(touching.unwrap().status, BookingStatus::Pending);

    let containing = state.request_handler.handle(at("bk-9-14", 9, 14)).await;
    assert!(matches!(
        containing,
        Err(ApplicationError::Domain(DecideError::Conflict { .. }))
    ));

    let loaded = deps.store.load(SOLO).await.unwrap();
    assert_eq!(loaded.state.bookings.len(), 2);
    assert_eq!(loaded.state.ports.bookings_for(1).len(), 2);
}

#[tokio::test]
async fn request_approve_and_notify_round_trip() {
    let TestApp { deps, state, relay } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();
    relay.run_once().await.unwrap();

    let owner_inbox = deps.notifier.for_user("owner-fixed-0001").await;
    assert_eq!(owner_inbox.len(), 1);
    assert_eq!(owner_inbox[0].notification.kind, NotificationKind::BookingRequest);
    assert!(!owner_inbox[0].read);

    let pending = state
        .pending_requests
        .handle("st-fixed-0001", &Actor::user("owner-fixed-0001"))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    state
        .decide_handler
        .handle(DecideBookingBuilder::new().message("Bay 1 is by the entrance").build())
        .await
        .unwrap();
    relay.run_once().await.unwrap();

    assert!(deps.notifier.for_user("owner-fixed-0001").await[0].read);
    let driver_inbox = deps.notifier.for_user("driver-fixed-0001").await;
    assert_eq!(driver_inbox.len(), 1);
    assert_eq!(driver_inbox[0].notification.kind, NotificationKind::BookingApproved);

    let mine = state
        .requester_bookings
        .handle(&Actor::user("driver-fixed-0001"))
        .await
        .unwrap();
    assert_eq!(mine[0].booking.status, BookingStatus::Accepted);
    assert_eq!(mine[0].booking.owner_message.as_deref(), Some("Bay 1 is by the entrance"));
    assert!(
        state
            .pending_requests
            .handle("st-fixed-0001", &Actor::user("owner-fixed-0001"))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn a_decision_is_never_applied_twice() {
    let TestApp { state, .. } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();
    state
        .decide_handler
        .handle(DecideBookingBuilder::new().build())
        .await
        .unwrap();

    for verdict in [Verdict::Approve, Verdict::Reject] {
        let again = state
            .decide_handler
            .handle(DecideBookingBuilder::new().verdict(verdict).build())
            .await;
        assert!(matches!(
            again,
            Err(ApplicationError::Domain(DecideError::AlreadyDecided {
                status: BookingStatus::Accepted
            }))
        ));
    }
}

#[tokio::test]
async fn cancelled_booking_notifies_the_owner_and_blocks_decisions() {
    let TestApp { deps, state, relay } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();
    state
        .cancel_handler
        .handle(CancelBookingBuilder::new().cancelled_at(NOW + 1).build())
        .await
        .unwrap();
    relay.run_once().await.unwrap();

    let kinds: Vec<_> = deps
        .notifier
        .for_user("owner-fixed-0001")
        .await
        .into_iter()
        .map(|n| n.notification.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![NotificationKind::BookingRequest, NotificationKind::BookingCancelled]
    );

    let decided = state
        .decide_handler
        .handle(DecideBookingBuilder::new().decided_at(NOW + 2).build())
        .await;
    assert!(matches!(
        decided,
        Err(ApplicationError::Domain(DecideError::AlreadyDecided {
            status: BookingStatus::Cancelled
        }))
    ));
}

#[tokio::test]
async fn rejected_window_can_be_requested_again() {
    let TestApp { state, .. } = test_app().await;
    state
        .request_handler
        .handle(RequestBookingBuilder::new().build())
        .await
        .unwrap();
    state
        .decide_handler
        .handle(DecideBookingBuilder::new().verdict(Verdict::Reject).build())
        .await
        .unwrap();

    let retry = state
        .request_handler
        .handle(RequestBookingBuilder::new().booking_id("bk-retry").build())
        .await;
    assert_eq!(retry.unwrap().status, BookingStatus::Pending);
}

#[tokio::test]
async fn grown_station_accepts_bookings_on_the_new_ports() {
    let TestApp { deps, state, .. } = test_app().await;
    let before = state
        .request_handler
        .handle(RequestBookingBuilder::new().port_id(5).build())
        .await;
    assert!(matches!(
        before,
        Err(ApplicationError::Domain(DecideError::PortNotFound { port_id: 5 }))
    ));

    let grown = deps.stations.resize_ports("st-fixed-0001", 6).await.unwrap();
    assert_eq!(grown.port_ids, vec![1, 2, 3, 4, 5, 6]);
    assert!(deps.stations.resize_ports("st-fixed-0001", 2).await.is_err());

    let after = state
        .request_handler
        .handle(RequestBookingBuilder::new().port_id(5).build())
        .await
        .unwrap();
    assert_eq!(after.port_id, 5);

    let record = state
        .availability_handler
        .handle("st-fixed-0001", NOW)
        .await
        .unwrap();
    assert_eq!(record.total_ports, 6);
}
