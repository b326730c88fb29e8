use serde::{Deserialize, Serialize};

/// The convert endpoint always answers with both keys present, one of
/// them null, so thin clients can branch on `error` alone.
#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct ConvertResponse {
    pub result: Option<String>,
    pub error: Option<String>,
}

impl ConvertResponse {
    pub fn success(result: String) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: None,
            error: Some(msg.to_string()),
        }
    }
}
