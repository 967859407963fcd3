use chrono::NaiveDate;
use serde::Serialize;

/// One (lap, driver) timing within a round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapTime {
    pub season: u16,
    pub date: NaiveDate,
    pub round: u32,
    pub country: String,
    pub circuit_name: String,
    pub lap_number: String,
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub position: String,
    pub time: String,
}

/// One (race, driver) classified result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResult {
    pub season: u16,
    pub round: u32,
    pub race_name: String,
    pub circuit_name: String,
    pub date: NaiveDate,
    pub driver: String,
    pub position: String,
    /// Absent for lapped or retired drivers.
    pub time: Option<String>,
    pub points: String,
}

/// One driver's championship position as of a given round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStanding {
    pub season: u16,
    pub round: u32,
    pub driver: String,
    pub position: String,
    pub points: String,
}
