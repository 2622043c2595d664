use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::graphql::{GqlBooking, gql_actor, gql_error};
use crate::modules::bookings::use_cases::decide_booking::command::{DecideBooking, Verdict};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DecideBookingMutation;

#[Object]
impl DecideBookingMutation {
    async fn decide_booking(
        &self,
        context: &Context<'_>,
        station_id: String,
        booking_id: String,
        decision: Verdict,
        message: Option<String>,
    ) -> GqlResult<GqlBooking> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = DecideBooking {
            station_id,
            booking_id,
            verdict: decision,
            actor,
            message,
            decided_at: Utc::now().timestamp_millis(),
        };

        state
            .decide_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(gql_error)
    }
}
