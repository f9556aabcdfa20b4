use std::fmt;

use serde::Deserialize;

/// Body of a `/generate` reply. The server answers with both URLs on
/// success; either field may be missing or null, and unknown fields are
/// ignored, so `{}` decodes to "no image produced".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateResponse {
    pub uploaded_url: Option<String>,
    pub image_url: Option<String>,
}

impl GenerateResponse {
    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .map(|url| !url.is_empty())
            .unwrap_or(false)
    }
}

pub fn parse_generate_response(raw: &str) -> Result<GenerateResponse, ResponseError> {
    serde_json::from_str(raw).map_err(|err| ResponseError::Json(err.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseError {
    Json(String),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::Json(message) => {
                write!(f, "generate response is not valid JSON: {message}")
            }
        }
    }
}

impl std::error::Error for ResponseError {}
