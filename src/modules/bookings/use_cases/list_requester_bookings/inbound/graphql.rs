use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::bookings::adapters::inbound::graphql::{GqlBooking, gql_actor, gql_error};
use crate::modules::bookings::use_cases::list_requester_bookings::handler::RequesterBookingView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRequesterBooking {
    pub booking: GqlBooking,
    pub station_name: String,
}

impl From<RequesterBookingView> for GqlRequesterBooking {
    fn from(v: RequesterBookingView) -> Self {
        Self {
            booking: v.booking.into(),
            station_name: v.station_name,
        }
    }
}

#[derive(Default)]
pub struct RequesterBookingsQuery;

#[Object]
impl RequesterBookingsQuery {
    async fn my_bookings(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRequesterBooking>> {
        let actor = gql_actor(context)?;
        let state = context.data_unchecked::<AppState>();
        let views = state
            .requester_bookings
            .handle(&actor)
            .await
            .map_err(gql_error)?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
