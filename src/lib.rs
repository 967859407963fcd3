pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

pub use config::db::{connect, connect_to_db, DbConfig};
pub use core::client::ApiClient;
pub use core::marker::{read_marker, write_marker};
pub use core::sink::save_to_parquet;
pub use core::table::{build_table, Table};
pub use domain::model::{DriverStanding, LapTime, RaceResult};
pub use extract::{
    get_driver_standings, get_drivers, get_lap_times, get_race_results, total_rounds,
};
pub use utils::error::{EtlError, Result};
