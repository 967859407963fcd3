pub mod client;
pub mod marker;
pub mod sink;
pub mod table;

pub use client::ApiClient;
pub use marker::{read_marker, write_marker};
pub use sink::save_to_parquet;
pub use table::{build_table, Table};
