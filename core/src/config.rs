use crate::catalog::source::{JsonFileRecordSource, RecordSource, SampleRecordSource};
use crate::error::{CoreError, CoreResult};
use crate::generation::client::validate_endpoint;
use crate::generation::http::HttpGenerationClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeskConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<PathBuf>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            records_path: None,
        }
    }
}

impl DeskConfig {
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let cfg: DeskConfig = serde_json::from_slice(&bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_endpoint(&self.endpoint)?;
        if self.timeout_secs == 0 {
            return Err(CoreError::InvalidInput(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn record_source(&self) -> Box<dyn RecordSource> {
        match &self.records_path {
            Some(p) => Box::new(JsonFileRecordSource::new(p.clone())),
            None => Box::new(SampleRecordSource),
        }
    }

    pub fn generation_client(&self) -> CoreResult<HttpGenerationClient> {
        self.validate()?;
        HttpGenerationClient::new(&self.endpoint, self.timeout())
    }
}
