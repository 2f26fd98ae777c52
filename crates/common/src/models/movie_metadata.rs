use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Supplementary fields returned by the metadata provider for one movie. The provider decides the
/// shape, so the fields are kept as an ordered JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct MovieMetadata(Map<String, Value>);

impl MovieMetadata {
    pub fn new(fields: Map<String, Value>) -> Self {
        MovieMetadata(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the provider's error message when the payload is an error report rather than
    /// metadata. OMDb answers unknown identifiers with HTTP 200 and
    /// `{"Response": "False", "Error": "..."}`.
    pub fn provider_error(&self) -> Option<String> {
        if let Some(error) = self.0.get("Error") {
            return Some(match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });
        }

        match self.0.get("Response") {
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => {
                Some(String::from("Provider reported an unsuccessful response."))
            }
            Some(Value::Bool(false)) => {
                Some(String::from("Provider reported an unsuccessful response."))
            }
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for MovieMetadata {
    fn from(fields: Map<String, Value>) -> Self {
        MovieMetadata::new(fields)
    }
}
