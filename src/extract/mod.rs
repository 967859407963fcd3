//! Domain extractors. Each one builds its endpoint from the season (and
//! round, for the paginated ones), fetches through [`ApiClient`], and
//! projects the typed payload into records. A failed or empty round
//! contributes zero records and never aborts the loop.
//!
//! [`ApiClient`]: crate::core::client::ApiClient

pub mod drivers;
pub mod laps;
pub mod results;
pub mod rounds;
pub mod standings;

pub use drivers::get_drivers;
pub use laps::get_lap_times;
pub use results::get_race_results;
pub use rounds::total_rounds;
pub use standings::get_driver_standings;

use chrono::NaiveDate;

use crate::core::marker::DATE_FORMAT;

pub(crate) fn race_date(raw: Option<&str>, season: u16, round: u32) -> Option<NaiveDate> {
    let Some(raw) = raw else {
        tracing::warn!("race for season {season} round {round} carries no date");
        return None;
    };
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("race date '{raw}' for season {season} round {round} is unreadable: {e}");
            None
        }
    }
}

pub(crate) fn newer_than(date: NaiveDate, marker: Option<NaiveDate>) -> bool {
    marker.map_or(true, |marker| date > marker)
}
