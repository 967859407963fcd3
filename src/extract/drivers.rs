use std::collections::HashMap;

use serde_json::Value;

use crate::core::client::ApiClient;
use crate::core::table::{build_table, Table};

/// All drivers the endpoint returns, flattened full-fidelity into a table.
///
/// Static data: no marker, no filtering. The endpoint itself paginates, so
/// the caller supplies `limit`/`offset` through `params`.
pub async fn get_drivers(
    client: &ApiClient,
    endpoint: &str,
    params: Option<&HashMap<String, String>>,
) -> Option<Table> {
    let payload = client.fetch_payload(endpoint, params).await?;
    let drivers = payload
        .driver_table
        .map(|table| table.drivers)
        .unwrap_or_default();
    build_table(&Value::Array(drivers), None)
}
