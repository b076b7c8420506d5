use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

pub const NAME_MAX_LEN: usize = 120;
pub const ADDRESS_MAX_LEN: usize = 200;

/// Canonical home record as the store owns it
#[derive(Debug, Clone, PartialEq)]
pub struct Home {
    pub id: Uuid,
    pub name: String,
    pub home_type: HomeType,
    pub address: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeType {
    Single,
    Condo,
}

impl HomeType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(HomeType::Single),
            "condo" => Some(HomeType::Condo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeType::Single => "single",
            HomeType::Condo => "condo",
        }
    }
}

/// Raw creation payload before semantic validation
#[derive(Debug, Default, Deserialize)]
pub struct NewHomeRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub home_type: Option<String>,
    pub address: Option<String>,
}

/// Validated attributes for creating a home
#[derive(Debug, Clone)]
pub struct NewHome {
    pub name: String,
    pub home_type: HomeType,
    pub address: Option<String>,
}

impl NewHomeRequest {
    /// Check every field and collect all violations before failing, so a
    /// caller can fix the whole payload in one round trip.
    pub fn validate(self) -> Result<NewHome, ApiError> {
        let mut field_errors = HashMap::new();

        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => {
                field_errors.insert("name".to_string(), "name is required".to_string());
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_LEN => {
                field_errors.insert(
                    "name".to_string(),
                    format!("name must be at most {} characters", NAME_MAX_LEN),
                );
                None
            }
            Some(name) => Some(name.to_string()),
        };

        let home_type = match self.home_type.as_deref() {
            None | Some("") => {
                field_errors.insert("type".to_string(), "type is required".to_string());
                None
            }
            Some(raw) => match HomeType::parse(raw) {
                Some(home_type) => Some(home_type),
                None => {
                    field_errors.insert(
                        "type".to_string(),
                        "type must be one of: single, condo".to_string(),
                    );
                    None
                }
            },
        };

        if let Some(address) = self.address.as_deref() {
            if address.chars().count() > ADDRESS_MAX_LEN {
                field_errors.insert(
                    "address".to_string(),
                    format!("address must be at most {} characters", ADDRESS_MAX_LEN),
                );
            }
        }

        match (name, home_type) {
            (Some(name), Some(home_type)) if field_errors.is_empty() => Ok(NewHome {
                name,
                home_type,
                address: self.address,
            }),
            _ => Err(ApiError::validation_error(
                "Invalid home payload",
                Some(field_errors),
            )),
        }
    }
}

/// Raw partial-update payload before semantic validation.
///
/// Absent fields stay unset. The nullable `address` uses a nested option so
/// an explicit `"address": null` (clear it) is distinguishable from the key
/// being absent (leave it alone).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHomeRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub home_type: Option<String>,
    #[serde(default, deserialize_with = "some_nullable")]
    pub address: Option<Option<String>>,
}

/// Validated sparse patch for a home
#[derive(Debug, Clone, Default)]
pub struct UpdateHome {
    pub name: Option<String>,
    pub home_type: Option<HomeType>,
    pub address: Option<Option<String>>,
}

fn some_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateHomeRequest {
    /// Check every present field and collect all violations before failing
    pub fn validate(self) -> Result<UpdateHome, ApiError> {
        let mut field_errors = HashMap::new();

        let name = match self.name.as_deref().map(str::trim) {
            None => None,
            Some("") => {
                field_errors.insert("name".to_string(), "name must not be empty".to_string());
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_LEN => {
                field_errors.insert(
                    "name".to_string(),
                    format!("name must be at most {} characters", NAME_MAX_LEN),
                );
                None
            }
            Some(name) => Some(name.to_string()),
        };

        let home_type = match self.home_type.as_deref() {
            None => None,
            Some(raw) => match HomeType::parse(raw) {
                Some(home_type) => Some(home_type),
                None => {
                    field_errors.insert(
                        "type".to_string(),
                        "type must be one of: single, condo".to_string(),
                    );
                    None
                }
            },
        };

        if let Some(Some(address)) = self.address.as_ref() {
            if address.chars().count() > ADDRESS_MAX_LEN {
                field_errors.insert(
                    "address".to_string(),
                    format!("address must be at most {} characters", ADDRESS_MAX_LEN),
                );
            }
        }

        if !field_errors.is_empty() {
            return Err(ApiError::validation_error(
                "Invalid home payload",
                Some(field_errors),
            ));
        }

        Ok(UpdateHome {
            name,
            home_type,
            address: self.address,
        })
    }
}

/// Wire projection of a home record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub home_type: HomeType,
    pub address: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl From<&Home> for HomeView {
    fn from(home: &Home) -> Self {
        Self {
            id: home.id,
            name: home.name.clone(),
            home_type: home.home_type,
            address: home.address.clone(),
            date_created: home.date_created,
            date_updated: home.date_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_home_collects_all_violations() {
        let request: NewHomeRequest =
            serde_json::from_value(json!({ "name": "", "type": "castle" })).unwrap();
        let err = request.validate().unwrap_err();

        let body = err.to_json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["name"].is_string());
        assert!(body["field_errors"]["type"].is_string());
    }

    #[test]
    fn new_home_requires_both_name_and_type() {
        let err = NewHomeRequest::default().validate().unwrap_err();
        let body = err.to_json();
        assert!(body["field_errors"]["name"].is_string());
        assert!(body["field_errors"]["type"].is_string());
    }

    #[test]
    fn new_home_valid_payload_passes() {
        let request: NewHomeRequest =
            serde_json::from_value(json!({ "name": "Lake House", "type": "single" })).unwrap();
        let new = request.validate().unwrap();
        assert_eq!(new.name, "Lake House");
        assert_eq!(new.home_type, HomeType::Single);
        assert_eq!(new.address, None);
    }

    #[test]
    fn new_home_name_is_trimmed() {
        let request: NewHomeRequest =
            serde_json::from_value(json!({ "name": "  Lake House  ", "type": "condo" })).unwrap();
        assert_eq!(request.validate().unwrap().name, "Lake House");
    }

    #[test]
    fn update_absent_address_is_distinguished_from_null() {
        let absent: UpdateHomeRequest = serde_json::from_value(json!({ "name": "Cabin" })).unwrap();
        assert_eq!(absent.address, None);

        let cleared: UpdateHomeRequest =
            serde_json::from_value(json!({ "address": null })).unwrap();
        assert_eq!(cleared.address, Some(None));

        let set: UpdateHomeRequest =
            serde_json::from_value(json!({ "address": "12 Shore Rd" })).unwrap();
        assert_eq!(set.address, Some(Some("12 Shore Rd".to_string())));
    }

    #[test]
    fn update_rejects_empty_name() {
        let request: UpdateHomeRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_with_no_fields_is_a_valid_noop_patch() {
        let patch = UpdateHomeRequest::default().validate().unwrap();
        assert!(patch.name.is_none());
        assert!(patch.home_type.is_none());
        assert!(patch.address.is_none());
    }

    #[test]
    fn view_serializes_type_and_camel_case_dates() {
        let home = Home {
            id: Uuid::new_v4(),
            name: "Lake House".to_string(),
            home_type: HomeType::Condo,
            address: None,
            date_created: Utc::now(),
            date_updated: Utc::now(),
        };
        let value = serde_json::to_value(HomeView::from(&home)).unwrap();
        assert_eq!(value["type"], "condo");
        assert!(value["dateCreated"].is_string());
        assert!(value.get("address").is_some());
    }
}
