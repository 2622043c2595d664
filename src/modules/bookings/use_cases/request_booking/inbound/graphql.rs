use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::graphql::{GqlBooking, gql_actor, gql_error};
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RequestBookingMutation;

#[Object]
impl RequestBookingMutation {
    async fn request_booking(
        &self,
        context: &Context<'_>,
        station_id: String,
        port_id: u32,
        start_time: i64,
        end_time: i64,
    ) -> GqlResult<GqlBooking> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();

        let command = RequestBooking {
            booking_id: Uuid::now_v7().to_string(),
            station_id,
            port_id,
            requester_id: actor.user_id,
            start_time,
            end_time,
            requested_at: Utc::now().timestamp_millis(),
        };

        state
            .request_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(gql_error)
    }
}
