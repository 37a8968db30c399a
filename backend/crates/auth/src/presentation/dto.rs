//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: Option<String>,
    pub app_name: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: Option<String>,
    pub app_name: Option<String>,
}

/// Session status response (extra fields of the success envelope)
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub userid: i64,
}

// ============================================================================
// Make App
// ============================================================================

/// App creation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MakeAppRequest {
    pub app_name: Option<String>,
}

/// App creation response (extra fields of the success envelope)
#[derive(Debug, Clone, Serialize)]
pub struct MakeAppResponse {
    pub app_name: String,
}

// ============================================================================
// Helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Accept `"1234"` and `1234` alike; numbers keep their decimal text
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_as_string_or_number() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"a","password":1234,"app_name":"d"}"#).unwrap();
        assert_eq!(req.password.as_deref(), Some("1234"));

        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"a","password":"pw1","app_name":"d"}"#).unwrap();
        assert_eq!(req.password.as_deref(), Some("pw1"));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"password":null}"#).unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_password_wrong_type_rejected() {
        let result = serde_json::from_str::<LoginRequest>(r#"{"password":true}"#);
        assert!(result.is_err());
    }
}
