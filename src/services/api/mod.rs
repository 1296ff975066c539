pub mod http;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// Boundary to the booking backend. Any acknowledged 2xx counts as success;
/// the response body is not inspected.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(&self, request: &BookingRequest) -> anyhow::Result<()>;
}
