//! Data types exchanged with the savings backend.

use serde::{Deserialize, Serialize};

/// A savings plan: a target amount to reach over a number of months.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// What the group is saving for
    #[serde(default)]
    pub motive: Option<String>,
    pub target_amount: i64,
    /// Duration of the plan in months
    pub months: i32,
    pub created_at: String,
}

/// A participant in a plan with a fixed monthly contribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub plan_id: String,
    pub contribution_per_month: i64,
    pub joined_at: String,
}

/// A contribution recorded by a member toward a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_id: String,
    pub plan_id: String,
    pub amount: i64,
    /// ISO-8601 timestamp (e.g., "2025-01-01T10:00:00.000Z")
    pub date: String,
}

/// Payload for `POST /members`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub plan_id: String,
    pub contribution_per_month: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_reads_underscore_id() {
        let member: Member = serde_json::from_value(json!({
            "_id": "m1",
            "name": "Juan",
            "planId": "p1",
            "contributionPerMonth": 100_000,
            "joinedAt": "2025-01-01T00:00:00Z"
        }))
        .expect("member should parse");

        assert_eq!(member.id, "m1");
        assert_eq!(member.plan_id, "p1");
        assert_eq!(member.contribution_per_month, 100_000);
    }

    #[test]
    fn test_plan_without_motive() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "p1",
            "name": "Trip",
            "targetAmount": 1_000_000,
            "months": 12,
            "createdAt": "2025-01-01"
        }))
        .expect("plan should parse");

        assert_eq!(plan.motive, None);
        assert_eq!(plan.target_amount, 1_000_000);
    }

    #[test]
    fn test_create_member_request_wire_names() {
        let request = CreateMemberRequest {
            name: "Ana".into(),
            plan_id: "p1".into(),
            contribution_per_month: 50_000,
        };

        assert_eq!(
            serde_json::to_value(&request).expect("should serialize"),
            json!({"name": "Ana", "planId": "p1", "contributionPerMonth": 50_000})
        );
    }
}
