use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Envelope wrapping the payload of a successful response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Envelope for successful operations that carry no payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Distinguishes an absent field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`: a missing field
/// stays `None`, `null` becomes `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        group_id: Option<Option<i32>>,
    }

    #[test]
    fn double_option_distinguishes_missing_from_null() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"group_id":null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"group_id":4}"#).unwrap();

        assert_eq!(missing.group_id, None);
        assert_eq!(null.group_id, Some(None));
        assert_eq!(set.group_id, Some(Some(4)));
    }

    #[test]
    fn error_envelope_is_unsuccessful() {
        let value = serde_json::to_value(ErrorDto::new("Table not found")).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Table not found");
    }
}
