pub mod db;

pub use db::{connect, connect_to_db, DbConfig};
