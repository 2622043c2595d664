use crate::modules::bookings::core::availability::with_recomputed_availability;
use crate::modules::bookings::core::decision::Decision;
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::events::v1::booking_archived::BookingArchivedV1;
use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;

/// Archives every booking whose window ended at or before `now`, keeping
/// whatever status it held, then re-derives the availability record.
/// Running it twice at the same instant yields the same ledger.
pub fn decide_recompute(state: &StationLedger, topology: &StationTopology, now: i64) -> Decision {
    let expired: Vec<_> = state
        .bookings
        .values()
        .filter(|b| b.window().has_elapsed(now))
        .collect();

    let events = expired
        .iter()
        .map(|b| {
            BookingEvent::BookingArchivedV1(BookingArchivedV1 {
                booking_id: b.booking_id.clone(),
                port_id: b.port_id,
                final_status: b.status,
                archived_at: now,
            })
        })
        .collect();
    let intents = expired
        .iter()
        .map(|b| BookingIntent::ArchiveBooking {
            record: HistoryRecord::from_booking(b, &topology.owner_id, now),
        })
        .collect();

    Decision::Accepted {
        events: with_recomputed_availability(state, topology, events, now),
        intents,
    }
}
