use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct ConvertRequest {
    /// the value to convert, written in the input format
    pub input: String,
    /// one of: text, binary, octal, decimal, hexadecimal, base64
    #[serde(rename = "inputType")]
    pub input_type: String,
    /// one of: text, binary, octal, decimal, hexadecimal, base64
    #[serde(rename = "outputType")]
    pub output_type: String,
}
