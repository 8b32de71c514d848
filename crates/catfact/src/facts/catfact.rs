use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::base::FactSource;
use super::configs::CatFactConfig;
use crate::errors::{FactError, FactResult};

pub struct CatFactSource {
    client: Client,
    config: CatFactConfig,
}

impl CatFactSource {
    pub fn new(config: CatFactConfig) -> FactResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatFactConfig {
        &self.config
    }

    fn extract_fact(&self, data: &Value) -> FactResult<String> {
        let object = data
            .as_object()
            .ok_or_else(|| FactError::InvalidJson("expected a JSON object".to_string()))?;

        object
            .get(&self.config.field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FactError::MissingField(self.config.field.clone()))
    }
}

#[async_trait]
impl FactSource for CatFactSource {
    async fn fetch(&self) -> FactResult<String> {
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        let body = response.bytes().await?;
        let data: Value =
            serde_json::from_slice(&body).map_err(|e| FactError::InvalidJson(e.to_string()))?;

        self.extract_fact(&data)
    }
}
