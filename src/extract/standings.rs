use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::client::ApiClient;
use crate::domain::model::DriverStanding;

/// Championship standings for the season, one record per (standings list,
/// driver). A season can carry several lists; the list's `round` says as of
/// which round its totals are valid.
///
/// `last_extraction_date` is accepted for signature parity with the other
/// temporal extractors but is not applied: standings are running totals, so
/// they are always re-extracted in full rather than filtered against the
/// marker (see DESIGN.md).
pub async fn get_driver_standings(
    client: &ApiClient,
    season: u16,
    params: Option<&HashMap<String, String>>,
    _last_extraction_date: Option<NaiveDate>,
) -> Vec<DriverStanding> {
    let endpoint = format!("{season}/driverStandings.json");
    let Some(payload) = client.fetch_payload(&endpoint, params).await else {
        return Vec::new();
    };

    let mut standings = Vec::new();
    for list in payload
        .standings_table
        .map(|table| table.standings_lists)
        .unwrap_or_default()
    {
        let Some(round) = list.round.as_deref().and_then(|r| r.parse::<u32>().ok()) else {
            tracing::warn!("standings list for season {season} carries no usable round");
            continue;
        };

        for entry in list.driver_standings {
            standings.push(DriverStanding {
                season,
                round,
                driver: entry.driver.and_then(|d| d.family_name).unwrap_or_default(),
                position: entry.position.unwrap_or_default(),
                points: entry.points.unwrap_or_default(),
            });
        }
    }

    standings
}
