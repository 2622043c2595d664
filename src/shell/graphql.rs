use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::modules::bookings::adapters::inbound::identity::actor_from_headers;
use crate::modules::bookings::use_cases::cancel_booking::inbound::graphql::CancelBookingMutation;
use crate::modules::bookings::use_cases::decide_booking::inbound::graphql::DecideBookingMutation;
use crate::modules::bookings::use_cases::list_pending_requests::inbound::graphql::PendingRequestsQuery;
use crate::modules::bookings::use_cases::list_requester_bookings::inbound::graphql::RequesterBookingsQuery;
use crate::modules::bookings::use_cases::recompute_availability::inbound::graphql::AvailabilityQuery;
use crate::modules::bookings::use_cases::request_booking::inbound::graphql::RequestBookingMutation;
use crate::modules::bookings::use_cases::station_history::inbound::graphql::StationHistoryQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    AvailabilityQuery,
    PendingRequestsQuery,
    RequesterBookingsQuery,
    StationHistoryQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RequestBookingMutation,
    DecideBookingMutation,
    CancelBookingMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(actor) = actor_from_headers(&headers) {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
