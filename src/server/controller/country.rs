use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::country::CountryListDto,
    server::{
        model::country::{Country, DEFAULT_COUNTRY_CODE},
        state::AppState,
    },
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

#[derive(Deserialize)]
pub struct CountrySearchParams {
    pub search: Option<String>,
}

/// Dial codes for the phone input.
///
/// Served from a one hour cache. When the upstream country API is unavailable a short
/// fallback list is returned instead.
#[utoipa::path(
    get,
    path = "/api/countries",
    tag = COUNTRY_TAG,
    params(
        ("search" = Option<String>, Query, description = "Filter by name or dial code")
    ),
    responses(
        (status = 200, description = "Countries sorted by name", body = CountryListDto)
    ),
)]
pub async fn get_countries(
    State(state): State<AppState>,
    Query(params): Query<CountrySearchParams>,
) -> impl IntoResponse {
    let countries = state
        .country_service
        .list(&state.http_client, params.search.as_deref())
        .await;

    (
        StatusCode::OK,
        Json(CountryListDto {
            default_code: DEFAULT_COUNTRY_CODE.to_string(),
            countries: countries.into_iter().map(Country::into_dto).collect(),
        }),
    )
}
