use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::client::ApiClient;
use crate::domain::model::RaceResult;
use crate::extract::{newer_than, race_date, total_rounds};

/// Classified results for every race of the season, one round at a time.
/// Races dated on or before `last_extraction_date` are skipped whole.
pub async fn get_race_results(
    client: &ApiClient,
    season: u16,
    params: Option<&HashMap<String, String>>,
    last_extraction_date: Option<NaiveDate>,
) -> Vec<RaceResult> {
    let mut race_results = Vec::new();
    let rounds = total_rounds(client, season).await;

    for round in 1..=rounds {
        let endpoint = format!("{season}/{round}/results.json");
        let Some(payload) = client.fetch_payload(&endpoint, params).await else {
            continue;
        };

        for race in payload.race_table.map(|table| table.races).unwrap_or_default() {
            let Some(date) = race_date(race.date.as_deref(), season, round) else {
                continue;
            };
            if !newer_than(date, last_extraction_date) {
                continue;
            }

            let race_name = race.race_name.unwrap_or_default();
            let circuit_name = race
                .circuit
                .as_ref()
                .and_then(|c| c.circuit_name.clone())
                .unwrap_or_default();

            for result in race.results {
                race_results.push(RaceResult {
                    season,
                    round,
                    race_name: race_name.clone(),
                    circuit_name: circuit_name.clone(),
                    date,
                    driver: result.driver.and_then(|d| d.family_name).unwrap_or_default(),
                    position: result.position.unwrap_or_default(),
                    time: result.time.and_then(|t| t.time),
                    points: result.points.unwrap_or_default(),
                });
            }
        }
    }

    race_results
}
