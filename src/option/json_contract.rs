use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartOption;

pub const CHART_OPTION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionJsonContractV1 {
    pub schema_version: u32,
    pub option: ChartOption,
}

impl ChartOption {
    /// Bare option JSON, ready to hand to the charting library.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart option: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartOptionJsonContractV1 {
            schema_version: CHART_OPTION_JSON_SCHEMA_V1,
            option: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart option contract v1: {e}"))
        })
    }

    /// Parses either a versioned contract payload or a bare option.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart option json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart option json: {e}"))
            });
        }

        let payload: ChartOptionJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to parse chart option contract payload: {e}"
            ))
        })?;
        if payload.schema_version != CHART_OPTION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart option schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{Axis, Series};

    #[test]
    fn contract_and_bare_json_parse_to_same_option() {
        let option = ChartOption {
            x_axis: vec![Axis::category(["a", "b"])],
            y_axis: vec![Axis::value()],
            series: vec![Series::bar().with_data([1.0, 2.0])],
            ..ChartOption::default()
        };

        let bare = option.to_json_pretty().expect("bare json");
        let contract = option.to_json_contract_v1_pretty().expect("contract json");

        assert_eq!(
            ChartOption::from_json_compat_str(&bare).expect("bare"),
            option
        );
        assert_eq!(
            ChartOption::from_json_compat_str(&contract).expect("contract"),
            option
        );
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let input = r#"{"schema_version": 9, "option": {"series": []}}"#;
        assert!(ChartOption::from_json_compat_str(input).is_err());
    }
}
