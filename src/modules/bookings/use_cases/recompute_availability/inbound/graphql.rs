use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::graphql::{GqlAvailability, gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AvailabilityQuery;

#[Object]
impl AvailabilityQuery {
    async fn station_availability(
        &self,
        context: &Context<'_>,
        station_id: String,
    ) -> GqlResult<GqlAvailability> {
        let state = context.data_unchecked::<AppState>();
        state
            .availability_handler
            .handle(&station_id, Utc::now().timestamp_millis())
            .await
            .map(Into::into)
            .map_err(gql_error)
    }
}
