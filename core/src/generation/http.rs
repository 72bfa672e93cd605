use super::client::{validate_endpoint, GenerationClient};
use super::request::{new_submission_id, GenerationRequest, GenerationResponse, RequestPart};
use crate::error::{CoreError, CoreResult};
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpGenerationClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl HttpGenerationClient {
    pub fn new(endpoint: &str, timeout: Duration) -> CoreResult<Self> {
        let url = validate_endpoint(endpoint)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Transport(format!("http client init failed: {}", e)))?;
        Ok(Self {
            endpoint: url.to_string(),
            http,
        })
    }

    fn build_form(req: &GenerationRequest) -> CoreResult<Form> {
        let mut form = Form::new();
        for part in req.parts() {
            form = match part {
                RequestPart::Text { name, value } => form.text(name, value.to_string()),
                RequestPart::File { name, attachment } => {
                    let p = Part::bytes(attachment.content.clone())
                        .file_name(attachment.filename.clone())
                        .mime_str(attachment.mime_type())
                        .map_err(|e| CoreError::InvalidInput(e.to_string()))?;
                    form.part(name, p)
                }
            };
        }
        Ok(form)
    }
}

impl GenerationClient for HttpGenerationClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate(&self, req: &GenerationRequest) -> CoreResult<GenerationResponse> {
        let submission_id = new_submission_id();
        let form = Self::build_form(req)?;
        debug!(
            submission_id = %submission_id,
            endpoint = %self.endpoint,
            files = req.files.len(),
            bytes = req.total_bytes(),
            "posting multipart request"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "failed" };
                warn!(submission_id = %submission_id, error = %e, "generation request {}", kind);
                CoreError::Transport(format!("request {}: {}", kind, e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(submission_id = %submission_id, status = status.as_u16(), "generation service rejected request");
            return Err(CoreError::Transport(format!(
                "generation service returned HTTP {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = resp.json().map_err(|e| {
            CoreError::Transport(format!("response body is not JSON: {}", e))
        })?;
        Ok(GenerationResponse {
            submission_id,
            payload,
        })
    }
}
