use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::graphql::{GqlBooking, gql_actor, gql_error};
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelBookingMutation;

#[Object]
impl CancelBookingMutation {
    async fn cancel_booking(
        &self,
        context: &Context<'_>,
        station_id: String,
        booking_id: String,
    ) -> GqlResult<GqlBooking> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let command = CancelBooking {
            station_id,
            booking_id,
            actor,
            cancelled_at: Utc::now().timestamp_millis(),
        };
        state
            .cancel_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(gql_error)
    }
}
