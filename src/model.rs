//! Purpose entity: storage row, wire representation and inbound payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row shape of the `purposes` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PurposeRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a purpose: exactly these six fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Purpose {
    /// Unique identifier for the purpose
    #[schema(example = 1)]
    pub id: i64,
    /// Name of the purpose
    #[schema(example = "Marketing", max_length = 100)]
    pub name: String,
    /// Detailed description of the purpose
    #[schema(example = "Storing data for marketing campaigns and analytics")]
    pub description: String,
    /// Whether the purpose is currently active
    #[schema(example = true)]
    pub is_active: bool,
    /// Timestamp when the purpose was created
    #[schema(example = "2023-01-01T00:00:00Z")]
    pub created_at: DateTime<Utc>,
    /// Timestamp when the purpose was last updated
    #[schema(example = "2023-01-02T00:00:00Z")]
    pub updated_at: DateTime<Utc>,
}

impl From<PurposeRow> for Purpose {
    fn from(row: PurposeRow) -> Self {
        Purpose {
            id: row.id,
            name: row.name,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Body of `POST /purposes`. Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PurposeCreate {
    /// Name of the purpose
    #[schema(example = "Marketing", max_length = 100)]
    pub name: String,
    /// Detailed description of the purpose
    #[serde(default)]
    #[schema(example = "Storing data for marketing campaigns and analytics")]
    pub description: Option<String>,
    /// Whether the purpose is currently active
    #[serde(default)]
    #[schema(example = true, default = true)]
    pub is_active: Option<bool>,
}

/// Body of `PUT /purposes/{id}`. Every field is optional; `null` means "leave as is".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PurposeUpdate {
    /// Name of the purpose
    #[serde(default)]
    #[schema(example = "Marketing", max_length = 100)]
    pub name: Option<String>,
    /// Detailed description of the purpose
    #[serde(default)]
    #[schema(example = "Storing data for marketing campaigns and analytics")]
    pub description: Option<String>,
    /// Whether the purpose is currently active
    #[serde(default)]
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

impl PurposeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_active.is_none()
    }
}

/// Validated input for an insert, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurpose {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl NewPurpose {
    pub fn new(name: impl Into<String>) -> Self {
        NewPurpose {
            name: name.into(),
            description: String::new(),
            is_active: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl From<PurposeCreate> for NewPurpose {
    fn from(body: PurposeCreate) -> Self {
        NewPurpose {
            name: body.name,
            description: body.description.unwrap_or_default(),
            is_active: body.is_active.unwrap_or(true),
        }
    }
}

/// Fields to change in a partial update; `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurposeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<PurposeUpdate> for PurposeChanges {
    fn from(body: PurposeUpdate) -> Self {
        PurposeChanges {
            name: body.name,
            description: body.description,
            is_active: body.is_active,
        }
    }
}

/// Filters and pagination for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive substring of `name`.
    pub name_contains: Option<String>,
    pub is_active: Option<bool>,
    pub skip: i64,
    pub limit: i64,
}

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;

impl Default for ListFilter {
    fn default() -> Self {
        ListFilter {
            name_contains: None,
            is_active: None,
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> PurposeRow {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        PurposeRow {
            id: 7,
            name: "Marketing".into(),
            description: "campaigns".into(),
            is_active: true,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn purpose_serializes_exactly_six_fields() {
        let value = serde_json::to_value(Purpose::from(row())).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["created_at", "description", "id", "is_active", "name", "updated_at"]
        );
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["created_at"], "2023-01-01T00:00:00Z");
    }

    #[test]
    fn create_body_defaults() {
        let body: PurposeCreate = serde_json::from_str(r#"{"name":"Marketing"}"#).unwrap();
        let new = NewPurpose::from(body);
        assert_eq!(new, NewPurpose::new("Marketing"));
        assert_eq!(new.description, "");
        assert!(new.is_active);
    }

    #[test]
    fn create_body_null_description_defaults_to_empty() {
        let body: PurposeCreate =
            serde_json::from_str(r#"{"name":"X","description":null,"is_active":false}"#).unwrap();
        let new = NewPurpose::from(body);
        assert_eq!(new.description, "");
        assert!(!new.is_active);
    }

    #[test]
    fn inbound_bodies_reject_unknown_fields() {
        assert!(serde_json::from_str::<PurposeCreate>(r#"{"name":"X","id":4}"#).is_err());
        assert!(serde_json::from_str::<PurposeUpdate>(r#"{"colour":"red"}"#).is_err());
    }

    #[test]
    fn inbound_bodies_do_not_coerce_types() {
        assert!(serde_json::from_str::<PurposeCreate>(r#"{"name":5}"#).is_err());
        assert!(serde_json::from_str::<PurposeUpdate>(r#"{"is_active":"true"}"#).is_err());
    }

    #[test]
    fn update_body_with_only_nulls_is_empty() {
        let body: PurposeUpdate =
            serde_json::from_str(r#"{"name":null,"description":null}"#).unwrap();
        assert!(body.is_empty());
        let body: PurposeUpdate = serde_json::from_str(r#"{"is_active":false}"#).unwrap();
        assert!(!body.is_empty());
    }
}
