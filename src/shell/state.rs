use crate::modules::bookings::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::modules::bookings::adapters::outbound::history_archive_in_memory::InMemoryHistoryArchive;
use crate::modules::bookings::adapters::outbound::intent_relay::IntentRelay;
use crate::modules::bookings::adapters::outbound::notifications_in_memory::InMemoryNotifier;
use crate::modules::bookings::adapters::outbound::stations_in_memory::InMemoryStationDirectory;
use crate::modules::bookings::adapters::outbound::users_in_memory::InMemoryUserDirectory;
use crate::modules::bookings::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::bookings::use_cases::decide_booking::handler::DecideBookingHandler;
use crate::modules::bookings::use_cases::ledger::LedgerCommitter;
use crate::modules::bookings::use_cases::list_pending_requests::handler::ListPendingRequestsHandler;
use crate::modules::bookings::use_cases::list_requester_bookings::handler::ListRequesterBookingsHandler;
use crate::modules::bookings::use_cases::recompute_availability::handler::RecomputeAvailabilityHandler;
use crate::modules::bookings::use_cases::request_booking::handler::RequestBookingHandler;
use crate::modules::bookings::use_cases::station_history::handler::StationHistoryHandler;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

type Store = InMemoryBookingStore;
type Outbox = InMemoryDomainOutbox;
type Stations = InMemoryStationDirectory;

pub type Relay = IntentRelay<Outbox, InMemoryNotifier, InMemoryHistoryArchive>;

/// Concrete adapters behind every port. Shared between the handlers, the
/// background workers and the seed loader.
#[derive(Clone, Default)]
pub struct InMemoryDeps {
    pub store: Arc<Store>,
    pub outbox: Arc<Outbox>,
    pub stations: Arc<Stations>,
    pub users: Arc<InMemoryUserDirectory>,
    pub notifier: Arc<InMemoryNotifier>,
    pub history: Arc<InMemoryHistoryArchive>,
}

impl InMemoryDeps {
    pub fn relay(&self, batch_size: usize, max_attempts: u32) -> Relay {
        IntentRelay::new(
            self.outbox.clone(),
            self.notifier.clone(),
            self.history.clone(),
            batch_size,
            max_attempts,
        )
    }
}

#[derive(Clone)]
pub struct AppState {
    pub request_handler: Arc<RequestBookingHandler<Store, Outbox, Stations>>,
    pub decide_handler: Arc<DecideBookingHandler<Store, Outbox, Stations>>,
    pub cancel_handler: Arc<CancelBookingHandler<Store, Outbox, Stations>>,
    pub availability_handler: Arc<RecomputeAvailabilityHandler<Store, Outbox, Stations>>,
    pub pending_requests: Arc<ListPendingRequestsHandler>,
    pub requester_bookings: Arc<ListRequesterBookingsHandler>,
    pub station_history: Arc<StationHistoryHandler>,
}

impl AppState {
    pub fn from_deps(deps: &InMemoryDeps, topic: &str, max_retries: u32) -> Self {
        let committer = Arc::new(LedgerCommitter::new(
            topic,
            deps.store.clone(),
            deps.outbox.clone(),
            max_retries,
        ));
        Self {
            request_handler: Arc::new(RequestBookingHandler::new(
                committer.clone(),
                deps.stations.clone(),
            )),
            decide_handler: Arc::new(DecideBookingHandler::new(
                committer.clone(),
                deps.stations.clone(),
            )),
            cancel_handler: Arc::new(CancelBookingHandler::new(
                committer.clone(),
                deps.stations.clone(),
            )),
            availability_handler: Arc::new(RecomputeAvailabilityHandler::new(
                committer,
                deps.stations.clone(),
            )),
            pending_requests: Arc::new(ListPendingRequestsHandler::new(
                deps.store.clone(),
                deps.stations.clone(),
                deps.users.clone(),
            )),
            requester_bookings: Arc::new(ListRequesterBookingsHandler::new(
                deps.store.clone(),
                deps.stations.clone(),
            )),
            station_history: Arc::new(StationHistoryHandler::new(
                deps.history.clone(),
                deps.stations.clone(),
            )),
        }
    }
}
