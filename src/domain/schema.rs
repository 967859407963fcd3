//! Serde view of the upstream API's `MRData` envelope.
//!
//! Every field the extractors touch is typed here, decoded once at the fetch
//! boundary. Fields the API may omit are `Option`s, lists default to empty,
//! and anything else in the payload is ignored.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "MRData")]
    pub mr_data: Option<MrData>,
}

#[derive(Debug, Deserialize)]
pub struct MrData {
    pub total: Option<String>,
    #[serde(rename = "DriverTable")]
    pub driver_table: Option<DriverTable>,
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
    #[serde(rename = "StandingsTable")]
    pub standings_table: Option<StandingsTable>,
}

#[derive(Debug, Deserialize)]
pub struct DriverTable {
    // kept as raw JSON: the drivers table is flattened full-fidelity,
    // whatever fields the API happens to return
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
pub struct Race {
    #[serde(rename = "raceName")]
    pub race_name: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "Circuit")]
    pub circuit: Option<Circuit>,
    #[serde(rename = "Laps", default)]
    pub laps: Vec<Lap>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Circuit {
    #[serde(rename = "circuitName")]
    pub circuit_name: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<Location>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Lap {
    pub number: Option<String>,
    #[serde(rename = "Timings", default)]
    pub timings: Vec<Timing>,
}

#[derive(Debug, Deserialize)]
pub struct Timing {
    #[serde(rename = "driverId")]
    pub driver_id: Option<String>,
    pub position: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultEntry {
    pub position: Option<String>,
    pub points: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Option<DriverRef>,
    #[serde(rename = "Time")]
    pub time: Option<ResultTime>,
}

#[derive(Debug, Deserialize)]
pub struct DriverRef {
    #[serde(rename = "familyName")]
    pub family_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultTime {
    pub time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsList {
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStandingEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DriverStandingEntry {
    pub position: Option<String>,
    pub points: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Option<DriverRef>,
}
