use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, info};
use thiserror::Error;
use web_sys::FormData;

use super::session::FormPayload;

/// Why a submission didn't go through. Only ever logged; visitors see a generic banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not encode form body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Sends a form payload somewhere and reports the HTTP status that came back.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, endpoint: &str, payload: &FormPayload) -> Result<u16, SubmitError>;
}

/// Multipart POST through the browser's fetch.
pub struct HttpTransport;

#[async_trait(?Send)]
impl FormTransport for HttpTransport {
    async fn post_form(&self, endpoint: &str, payload: &FormPayload) -> Result<u16, SubmitError> {
        let body = FormData::new().map_err(|e| SubmitError::Encode(format!("{:?}", e)))?;
        for (name, value) in payload {
            body.append_with_str(name, value)
                .map_err(|e| SubmitError::Encode(format!("{:?}", e)))?;
        }

        debug!("POST {} with {} fields", endpoint, payload.len());
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(response.status())
    }
}

/// Runs one submission and folds non-2xx statuses into an error.
pub async fn submit<T: FormTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    payload: &FormPayload,
) -> Result<u16, SubmitError> {
    let status = transport.post_form(endpoint, payload).await?;
    info!("form endpoint answered {}", status);
    if (200..300).contains(&status) {
        Ok(status)
    } else {
        Err(SubmitError::Status(status))
    }
}

/// Test double that records every call and answers with a fixed reply.
#[cfg(test)]
pub struct RecordingTransport {
    reply: Result<u16, SubmitError>,
    calls: std::cell::RefCell<Vec<(String, FormPayload)>>,
}

#[cfg(test)]
impl RecordingTransport {
    pub fn replying(reply: Result<u16, SubmitError>) -> Self {
        Self { reply, calls: Default::default() }
    }

    pub fn calls(&self) -> Vec<(String, FormPayload)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[cfg(test)]
#[async_trait(?Send)]
impl FormTransport for RecordingTransport {
    async fn post_form(&self, endpoint: &str, payload: &FormPayload) -> Result<u16, SubmitError> {
        self.calls.borrow_mut().push((endpoint.to_string(), payload.clone()));
        self.reply.clone()
    }
}
