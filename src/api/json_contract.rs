use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::GalleryConfig;

pub const GALLERY_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GalleryConfig,
}

impl GalleryConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize gallery config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = GalleryConfigJsonContractV1 {
            schema_version: GALLERY_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize gallery config contract v1: {e}"
            ))
        })
    }

    /// Parses a versioned payload or a bare config and validates it.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse gallery config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            Self::from_contract_value(value)?
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse gallery config json: {e}"))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    fn from_contract_value(value: serde_json::Value) -> ChartResult<Self> {
        let payload: GalleryConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse gallery config payload: {e}"))
        })?;
        if payload.schema_version != GALLERY_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported gallery config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
