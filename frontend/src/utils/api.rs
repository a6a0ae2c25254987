use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;

use crate::config::{self, EmailJsConfig};
use crate::survey::{Delivery, DeliveryError, SubmissionRecord};

/// Body accepted by the EmailJS `email/send` endpoint.
#[derive(Serialize, Debug)]
pub struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a SubmissionRecord,
}

/// Sends finished surveys through EmailJS.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJs {
    config: EmailJsConfig,
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(config::get_emailjs_config())
    }
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    pub fn request<'a>(&'a self, record: &'a SubmissionRecord) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: record,
        }
    }

    /// Posts the record and maps anything but a 2xx to an error.
    pub async fn send(&self, record: &SubmissionRecord) -> Result<(), DeliveryError> {
        let response = Request::post(self.config.endpoint)
            .json(&self.request(record))
            .map_err(|e| DeliveryError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        if response.ok() {
            gloo_console::log!("EmailJS accepted feedback");
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        gloo_console::log!("EmailJS rejected feedback with status:", status);
        Err(DeliveryError::Rejected { status, body })
    }
}

impl Delivery for EmailJs {
    fn deliver<'a>(
        &'a self,
        record: &'a SubmissionRecord,
    ) -> LocalBoxFuture<'a, Result<(), DeliveryError>> {
        Box::pin(self.send(record))
    }
}
