use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::show::{SeatAvailability, TheatreShows};
use crate::models::Show;
use crate::CineaClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TheatresQuery<'a> {
    movie_id: &'a str,
    date: NaiveDate,
    city: &'a str,
}

#[derive(Debug, Deserialize)]
struct TheatresResponse {
    theatres: Vec<TheatreShows>,
}

#[derive(Debug, Deserialize)]
struct ShowResponse {
    show: Show,
}

/// GET /shows/theatres — theatres and showtimes for a movie on a date.
/// Falls back to the preferred-city setting when no city is passed.
pub async fn theatres(
    client: &CineaClient,
    movie_id: &str,
    date: NaiveDate,
    city: Option<&str>,
) -> Result<Vec<TheatreShows>, ApiError> {
    let preferred = client.prefs.preferred_city();
    let city = city
        .map(str::to_string)
        .or(preferred)
        .unwrap_or_default();

    let resp: TheatresResponse = client
        .http
        .get_query(
            "/shows/theatres",
            &TheatresQuery {
                movie_id,
                date,
                city: &city,
            },
        )
        .await?;
    Ok(resp.theatres)
}

// GET /shows/{id} — seat layout fetched once per page load
pub async fn get(client: &CineaClient, show_id: &str) -> Result<Show, ApiError> {
    let resp: ShowResponse = client.http.get(&format!("/shows/{}", show_id)).await?;
    Ok(resp.show)
}

// GET /shows/{id}/seats — current booked/locked sets only
pub async fn availability(
    client: &CineaClient,
    show_id: &str,
) -> Result<SeatAvailability, ApiError> {
    client
        .http
        .get(&format!("/shows/{}/seats", show_id))
        .await
}
