use serde::{Deserialize, Serialize};

use crate::compose::figure::FigureSpec;
use crate::error::{PlotError, PlotResult};

pub const FIGURE_SPEC_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire form of a figure specification, so host applications can
/// persist or ship figures without inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpecJsonContractV1 {
    pub schema_version: u32,
    pub figure: FigureSpec,
}

impl FigureSpec {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = FigureSpecJsonContractV1 {
            schema_version: FIGURE_SPEC_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize figure contract v1: {e}"))
        })
    }

    /// Parses either a bare figure spec or the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(figure) = serde_json::from_str::<FigureSpec>(input) {
            return Ok(figure);
        }
        let payload: FigureSpecJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse figure json payload: {e}")))?;
        if payload.schema_version != FIGURE_SPEC_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported figure schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.figure)
    }
}
