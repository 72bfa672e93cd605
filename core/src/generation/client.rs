use super::request::{GenerationRequest, GenerationResponse};
use crate::error::{CoreError, CoreResult};
use url::Url;

pub trait GenerationClient {
    fn endpoint(&self) -> &str;
    fn generate(&self, req: &GenerationRequest) -> CoreResult<GenerationResponse>;
}

pub fn validate_endpoint(endpoint: &str) -> CoreResult<Url> {
    let url = Url::parse(endpoint.trim())
        .map_err(|_| CoreError::InvalidInput(format!("invalid endpoint URL: {}", endpoint)))?;
    let scheme = url.scheme().to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(CoreError::InvalidInput(
            "endpoint scheme must be http or https".to_string(),
        ));
    }
    if url.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(CoreError::InvalidInput(
            "endpoint URL missing host".to_string(),
        ));
    }
    Ok(url)
}
