use crate::modules::bookings::core::availability::with_recomputed_availability;
use crate::modules::bookings::core::decision::{DecideError, Decision};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::events::v1::booking_cancelled::BookingCancelledV1;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::notifications::{
    NotificationKind, OutboundNotification, format_instant,
};
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;

/// The booking stays in the ledger as `cancelled` until its window elapses
/// and the expiry sweep archives it.
pub fn decide_cancel(
    state: &StationLedger,
    topology: &StationTopology,
    command: &CancelBooking,
) -> Decision {
    let Some(booking) = state.booking(&command.booking_id) else {
        return Decision::Rejected {
            reason: DecideError::BookingNotFound {
                booking_id: command.booking_id.clone(),
            },
        };
    };
    if !command.actor.is_admin() && !command.actor.is(&booking.requester_id) {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    }
    if !booking.status.holds_port() {
        return Decision::Rejected {
            reason: DecideError::NotCancellable {
                status: booking.status,
            },
        };
    }

    let event = BookingEvent::BookingCancelledV1(BookingCancelledV1 {
        booking_id: command.booking_id.clone(),
        cancelled_by: command.actor.user_id.clone(),
        cancelled_at: command.cancelled_at,
    });
    let notification = OutboundNotification {
        user_id: topology.owner_id.clone(),
        kind: NotificationKind::BookingCancelled,
        title: format!("Booking cancelled at {}", topology.name),
        body: format!(
            "The booking for port {} from {} to {} was cancelled",
            booking.port_id,
            format_instant(booking.start_time),
            format_instant(booking.end_time)
        ),
        related_booking_id: command.booking_id.clone(),
    };

    Decision::Accepted {
        events: with_recomputed_availability(state, topology, vec![event], command.cancelled_at),
        intents: vec![BookingIntent::NotifyUser { notification }],
    }
}

#[cfg(test)]
mod cancel_booking_decide_tests {
    use super::*;
    use crate::modules::bookings::core::actor::Actor;
    use crate::modules::bookings::core::booking::BookingStatus;
    use crate::modules::bookings::core::evolve::evolve;
    use crate::tests::fixtures::commands::CancelBookingBuilder;
    use crate::tests::fixtures::events::requested_ledger;
    use crate::tests::fixtures::stations::single_port_station;
    use rstest::rstest;

    fn ledger_with_status(status: BookingStatus) -> StationLedger {
        let mut state = requested_ledger();
        let mut booking = state.bookings["bk-fixed-0001"].clone();
        booking.status = status;
        state.ports.upsert(booking.clone());
        state.bookings.insert(booking.booking_id.clone(), booking);
        state
    }

    #[rstest]
    #[case(BookingStatus::Pending)]
    #[case(BookingStatus::Accepted)]
    fn it_should_cancel_a_booking_that_holds_its_port(#[case] status: BookingStatus) {
        let state = ledger_with_status(status);
        let decision = decide_cancel(
            &state,
            &single_port_station(),
            &CancelBookingBuilder::new().build(),
        );
        let Decision::Accepted { events, intents } = decision else {
            panic!("expected Accepted");
        };
        let next = events.iter().fold(state, evolve);
        let booking = next.booking("bk-fixed-0001").unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert!(booking.cancelled_at.is_some());
        assert!(matches!(
            &intents[..],
            [BookingIntent::NotifyUser { notification }]
                if notification.user_id == "owner-fixed-0001"
                    && notification.kind == NotificationKind::BookingCancelled
        ));
    }

    #[rstest]
    #[case(BookingStatus::Rejected)]
    #[case(BookingStatus::Cancelled)]
    #[case(BookingStatus::Active)]
    #[case(BookingStatus::Completed)]
    fn it_should_refuse_to_cancel_in_any_other_status(#[case] status: BookingStatus) {
        let decision = decide_cancel(
            &ledger_with_status(status),
            &single_port_station(),
            &CancelBookingBuilder::new().build(),
        );
        assert!(matches!(
            decision,
            Decision::Rejected { reason: DecideError::NotCancellable { status: s } } if s == status
        ));
    }

    #[rstest]
    fn it_should_forbid_the_station_owner_from_cancelling_for_the_driver() {
        let command = CancelBookingBuilder::new()
            .actor(Actor::user("owner-fixed-0001"))
            .build();
        let decision = decide_cancel(&requested_ledger(), &single_port_station(), &command);
        assert!(matches!(
            decision,
            Decision::Rejected {
                reason: DecideError::Forbidden
            }
        ));
    }

    #[rstest]
    fn it_should_let_an_admin_cancel() {
        let command = CancelBookingBuilder::new().actor(Actor::admin("root")).build();
        let decision = decide_cancel(&requested_ledger(), &single_port_station(), &command);
        assert!(matches!(decision, Decision::Accepted { .. }));
    }

    #[rstest]
    fn it_should_fail_for_an_unknown_booking() {
        let command = CancelBookingBuilder::new().booking_id("bk-missing").build();
        let decision = decide_cancel(&requested_ledger(), &single_port_station(), &command);
        assert!(matches!(
            decision,
            Decision::Rejected {
                reason: DecideError::BookingNotFound { .. }
            }
        ));
    }
}
