use crate::core::client::ApiClient;

/// Number of rounds in `season`, from the season summary endpoint.
/// Drives the per-round pagination of the temporal extractors; 0 when the
/// fetch fails or the count is absent or unparseable.
pub async fn total_rounds(client: &ApiClient, season: u16) -> u32 {
    let endpoint = format!("{season}.json");
    let Some(payload) = client.fetch_payload(&endpoint, None).await else {
        return 0;
    };

    match payload.total.as_deref().map(str::parse::<u32>) {
        Some(Ok(total)) => total,
        Some(Err(_)) => {
            tracing::warn!("season {season} summary carries a non-numeric round total");
            0
        }
        None => {
            tracing::warn!("season {season} summary carries no round total");
            0
        }
    }
}
