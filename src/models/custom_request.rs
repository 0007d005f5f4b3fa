use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Breakfast,
    Lunch,
    Dinner,
    Any,
}

/// The requester as embedded in admin listings (the server populates the
/// `userId` reference into this summary)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Requester {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// `userId` arrives populated on the admin endpoints and as a bare id on the
/// guest-facing ones
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequesterRef {
    Id(String),
    Populated(Requester),
}

impl RequesterRef {
    pub fn id(&self) -> &str {
        match self {
            RequesterRef::Id(id) => id,
            RequesterRef::Populated(requester) => &requester.id,
        }
    }
}

/// An off-menu meal request: a guest describes what they want cooked, the
/// kitchen admin prices and approves (or rejects) it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFoodRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: RequesterRef,
    pub request_title: String,
    pub description: String,
    pub preferred_date: DateTime<Utc>,
    pub preferred_time: PreferredTime,
    pub guest_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomFoodRequest {
    pub request_title: String,
    pub description: String,
    pub preferred_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<PreferredTime>,
    pub guest_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveCustomRequest {
    pub final_price: f64,
    pub admin_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectCustomRequest {
    pub admin_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_populated_request() {
        let raw = r#"{
            "_id": "cr1",
            "userId": {"_id": "u1", "firstName": "Ada", "lastName": "L", "email": "a@b.c"},
            "requestTitle": "Anniversary dinner",
            "description": "Seven course tasting menu",
            "preferredDate": "2026-08-20T00:00:00Z",
            "preferredTime": "dinner",
            "guestCount": 2,
            "dietaryRestrictions": ["vegetarian"],
            "status": "pending",
            "createdAt": "2026-08-01T09:00:00Z",
            "updatedAt": "2026-08-01T09:00:00Z"
        }"#;
        let request: CustomFoodRequest = serde_json::from_str(raw).expect("request should parse");
        assert_eq!(request.preferred_time, PreferredTime::Dinner);
        assert_eq!(request.user_id.id(), "u1");
        match &request.user_id {
            RequesterRef::Populated(requester) => assert_eq!(requester.first_name, "Ada"),
            RequesterRef::Id(_) => panic!("expected the populated shape"),
        }
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn a_bare_requester_id_also_parses() {
        let reference: RequesterRef =
            serde_json::from_str(r#""u9""#).expect("bare id should parse");
        assert_eq!(reference.id(), "u9");
    }
}
