use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::bookings::adapters::inbound::graphql::{gql_actor, gql_error};
use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlHistoryRecord {
    pub booking_id: String,
    pub station_id: String,
    pub requester_id: String,
    pub port_id: u32,
    pub start_time: i64,
    pub end_time: i64,
    pub final_status: String,
    pub owner_message: Option<String>,
    pub archived_at: i64,
}

impl From<HistoryRecord> for GqlHistoryRecord {
    fn from(r: HistoryRecord) -> Self {
        Self {
            booking_id: r.booking_id,
            station_id: r.station_id,
            requester_id: r.requester_id,
            port_id: r.port_id,
            start_time: r.start_time,
            end_time: r.end_time,
            final_status: r.final_status.as_str().to_string(),
            owner_message: r.owner_message,
            archived_at: r.archived_at,
        }
    }
}

#[derive(Default)]
pub struct StationHistoryQuery;

#[Object]
impl StationHistoryQuery {
    async fn station_history(
        &self,
        context: &Context<'_>,
        station_id: String,
    ) -> GqlResult<Vec<GqlHistoryRecord>> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let records = state
            .station_history
            .handle(&station_id, &actor)
            .await
            .map_err(gql_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
