use anyhow::Context;
use async_trait::async_trait;

use super::BookingApi;
use crate::models::BookingRequest;

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn create_booking(&self, request: &BookingRequest) -> anyhow::Result<()> {
        let url = format!("{}/api/bookings", self.base_url);

        self.client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("failed to reach booking service")?
            .error_for_status()
            .context("booking service rejected the request")?;

        Ok(())
    }
}
