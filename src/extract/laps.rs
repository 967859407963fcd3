use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::client::ApiClient;
use crate::domain::model::LapTime;
use crate::extract::{newer_than, race_date, total_rounds};

/// Every (lap, driver) timing of the season, one round at a time.
///
/// The API dates the race, not the lap, so the marker filter includes or
/// excludes a round's timings as a block: everything from rounds raced
/// strictly after `last_extraction_date`, nothing from the rest.
pub async fn get_lap_times(
    client: &ApiClient,
    season: u16,
    params: Option<&HashMap<String, String>>,
    last_extraction_date: Option<NaiveDate>,
) -> Vec<LapTime> {
    let mut lap_times = Vec::new();
    let rounds = total_rounds(client, season).await;

    for round in 1..=rounds {
        let endpoint = format!("{season}/{round}/laps.json");
        let Some(payload) = client.fetch_payload(&endpoint, params).await else {
            continue;
        };

        // this endpoint returns at most one race per round
        let races = payload.race_table.map(|table| table.races).unwrap_or_default();
        let Some(race) = races.into_iter().next() else {
            tracing::debug!("no race data for season {season} round {round}");
            continue;
        };

        let Some(date) = race_date(race.date.as_deref(), season, round) else {
            continue;
        };
        if !newer_than(date, last_extraction_date) {
            continue;
        }

        let country = race
            .circuit
            .as_ref()
            .and_then(|c| c.location.as_ref())
            .and_then(|l| l.country.clone())
            .unwrap_or_default();
        let circuit_name = race
            .circuit
            .as_ref()
            .and_then(|c| c.circuit_name.clone())
            .unwrap_or_default();

        for lap in race.laps {
            let lap_number = lap.number.unwrap_or_default();
            for timing in lap.timings {
                lap_times.push(LapTime {
                    season,
                    date,
                    round,
                    country: country.clone(),
                    circuit_name: circuit_name.clone(),
                    lap_number: lap_number.clone(),
                    driver_id: timing.driver_id.unwrap_or_default(),
                    position: timing.position.unwrap_or_default(),
                    time: timing.time.unwrap_or_default(),
                });
            }
        }
    }

    lap_times
}
