use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::use_cases::decide_booking::command::DecideBooking;
use crate::modules::bookings::use_cases::decide_booking::decide::decide_booking;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::ledger::{LedgerCommitter, station_topology};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct DecideBookingHandler<TStore, TOutbox, TStations>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
    TStations: StationDirectory + 'static,
{
    committer: Arc<LedgerCommitter<TStore, TOutbox>>,
    stations: Arc<TStations>,
}

impl<TStore, TOutbox, TStations> DecideBookingHandler<TStore, TOutbox, TStations>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
    TStations: StationDirectory + 'static,
{
    pub fn new(committer: Arc<LedgerCommitter<TStore, TOutbox>>, stations: Arc<TStations>) -> Self {
        Self {
            committer,
            stations,
        }
    }

    pub async fn handle(&self, command: DecideBooking) -> Result<Booking, ApplicationError> {
        let topology = station_topology(&*self.stations, &command.station_id).await?;
        let committed = self
            .committer
            .commit(&command.station_id, command.decided_at, |state| {
                decide_booking(state, &topology, &command)
            })
            .await?;
        committed
            .state
            .booking(&command.booking_id)
            .cloned()
            .ok_or_else(|| {
                DecideError::BookingNotFound {
                    booking_id: command.booking_id.clone(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod decide_booking_handler_tests {
    use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
    use crate::modules::bookings::core::booking::BookingStatus;
    use crate::modules::bookings::core::decision::DecideError;
    use crate::modules::bookings::use_cases::decide_booking::command::Verdict;
    use crate::modules::bookings::use_cases::errors::ApplicationError;
    use crate::tests::fixtures::commands::{DecideBookingBuilder, RequestBookingBuilder};
    use crate::tests::fixtures::context::{TestApp, test_app, test_app_with};
    use rstest::rstest;
    use tokio::join;

    #[rstest]
    #[tokio::test]
    async fn it_should_approve_in_both_copies_and_mark_the_request_read() {
        let TestApp { deps, state, relay } = test_app().await;
        state
            .request_handler
            .handle(RequestBookingBuilder::new().build())
            .await
            .unwrap();
        relay.run_once().await.unwrap();

        let booking = state
            .decide_handler
            .handle(DecideBookingBuilder::new().build())
            .await
            .expect("decision failed");
        assert_eq!(booking.status, BookingStatus::Accepted);
        assert!(booking.approved_at.is_some());

        let loaded = deps.store.load("st-fixed-0001").await.unwrap();
        assert_eq!(loaded.state.ports.bookings_for(1)[0].status, BookingStatus::Accepted);

        relay.run_once().await.unwrap();
        let owner_inbox = deps.notifier.for_user("owner-fixed-0001").await;
        assert_eq!(owner_inbox.len(), 1);
        assert!(owner_inbox[0].read);
        let driver_inbox = deps.notifier.for_user("driver-fixed-0001").await;
        assert_eq!(driver_inbox.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_only_one_of_two_concurrent_decisions_succeed() {
        let TestApp { deps, state, .. } = test_app().await;
        state
            .request_handler
            .handle(RequestBookingBuilder::new().build())
            .await
            .unwrap();
        deps.store.set_delay_append_ms(10);
        let (approve, reject) = join!(
            state.decide_handler.handle(DecideBookingBuilder::new().build()),
            state
                .decide_handler
                .handle(DecideBookingBuilder::new().verdict(Verdict::Reject).build())
        );
        assert!(approve.is_ok() ^ reject.is_ok());
        let err = approve.err().or(reject.err()).unwrap();
        assert!(matches!(
            err,
            ApplicationError::Domain(DecideError::AlreadyDecided { .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_succeed_even_if_the_notifier_is_down() {
        let TestApp { deps, state, relay } = test_app_with(|options| {
            options.notifier_offline = true;
        })
        .await;
        state
            .request_handler
            .handle(RequestBookingBuilder::new().build())
            .await
            .unwrap();
        let booking = state
            .decide_handler
            .handle(DecideBookingBuilder::new().build())
            .await
            .expect("decision must not depend on notification delivery");
        assert_eq!(booking.status, BookingStatus::Accepted);
        let report = relay.run_once().await.unwrap();
        assert_eq!(report.delivered, 0);
        assert_eq!(report.retrying, 2);
        assert_eq!(report.deferred, 1);
        assert!(deps.notifier.for_user("driver-fixed-0001").await.is_empty());
    }
}
