// Fully wired in-memory application for handler, HTTP and e2e tests.

use crate::modules::bookings::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::modules::bookings::adapters::outbound::history_archive_in_memory::InMemoryHistoryArchive;
use crate::modules::bookings::adapters::outbound::notifications_in_memory::InMemoryNotifier;
use crate::modules::bookings::adapters::outbound::stations_in_memory::InMemoryStationDirectory;
use crate::modules::bookings::adapters::outbound::users_in_memory::InMemoryUserDirectory;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::state::{AppState, InMemoryDeps, Relay};
use crate::tests::fixtures::stations::four_port_station;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct TestOptions {
    pub store_offline: bool,
    pub store_mirror_fault: bool,
    pub outbox_offline: bool,
    pub stations_offline: bool,
    pub users_offline: bool,
    pub notifier_offline: bool,
    pub history_offline: bool,
}

pub struct TestApp {
    pub deps: InMemoryDeps,
    pub state: AppState,
    pub relay: Relay,
}

pub async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

pub async fn test_app_with(configure: impl FnOnce(&mut TestOptions)) -> TestApp {
    let mut options = TestOptions::default();
    configure(&mut options);

    let mut store = InMemoryBookingStore::new();
    if options.store_offline {
        store.toggle_offline();
    }
    if options.store_mirror_fault {
        store.toggle_mirror_fault();
    }
    let mut outbox = InMemoryDomainOutbox::new();
    if options.outbox_offline {
        outbox.toggle_offline();
    }
    let mut stations = InMemoryStationDirectory::new();
    stations.register(four_port_station()).await;
    if options.stations_offline {
        stations.toggle_offline();
    }
    let mut users = InMemoryUserDirectory::new();
    users.register("driver-fixed-0001", "Dana Driver").await;
    users.register("owner-fixed-0001", "Olive Owner").await;
    if options.users_offline {
        users.toggle_offline();
    }
    let mut notifier = InMemoryNotifier::new();
    if options.notifier_offline {
        notifier.toggle_offline();
    }
    let mut history = InMemoryHistoryArchive::new();
    if options.history_offline {
        history.toggle_offline();
    }

    let deps = InMemoryDeps {
        store: Arc::new(store),
        outbox: Arc::new(outbox),
        stations: Arc::new(stations),
        users: Arc::new(users),
        notifier: Arc::new(notifier),
        history: Arc::new(history),
    };
    let state = AppState::from_deps(&deps, "bookings.v1", 5);
    let relay = deps.relay(10, 3);
    TestApp { deps, state, relay }
}
