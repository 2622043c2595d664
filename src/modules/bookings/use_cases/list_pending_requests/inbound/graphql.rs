use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::bookings::adapters::inbound::graphql::{GqlBooking, gql_actor, gql_error};
use crate::modules::bookings::use_cases::list_pending_requests::handler::PendingRequestView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPendingRequest {
    pub booking: GqlBooking,
    pub requester_name: String,
}

impl From<PendingRequestView> for GqlPendingRequest {
    fn from(v: PendingRequestView) -> Self {
        Self {
            booking: v.booking.into(),
            requester_name: v.requester_name,
        }
    }
}

#[derive(Default)]
pub struct PendingRequestsQuery;

#[Object]
impl PendingRequestsQuery {
    async fn pending_requests(
        &self,
        context: &Context<'_>,
        station_id: String,
    ) -> GqlResult<Vec<GqlPendingRequest>> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let views = state
            .pending_requests
            .handle(&station_id, &actor)
            .await
            .map_err(gql_error)?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
