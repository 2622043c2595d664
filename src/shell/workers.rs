// Background loops: the expiry sweep and the outbox relay.

use crate::modules::bookings::adapters::outbound::booking_store_in_memory::InMemoryBookingStore;
use crate::modules::bookings::adapters::outbound::stations_in_memory::InMemoryStationDirectory;
use crate::modules::bookings::use_cases::recompute_availability::handler::RecomputeAvailabilityHandler;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::modules::bookings::adapters::outbound::intent_relay::RelayReport;
use crate::shell::state::Relay;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

type Sweeper = RecomputeAvailabilityHandler<
    InMemoryBookingStore,
    InMemoryDomainOutbox,
    InMemoryStationDirectory,
>;

pub fn spawn_sweeper(handler: Arc<Sweeper>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(error) = handler.sweep(Utc::now().timestamp_millis()).await {
                warn!(error = %error, "availability sweep aborted");
            }
        }
    })
}

pub fn spawn_relay(relay: Arc<Relay>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match relay.run_once().await {
                Ok(report) if report != RelayReport::default() => {
                    debug!(?report, "outbox relay pass");
                }
                Ok(_) => {}
                Err(error) => warn!(error = %error, "outbox relay pass failed"),
            }
        }
    })
}
