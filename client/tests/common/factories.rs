//! Test data builders.

use ahorros_client::api::{Member, Payment, Plan};
use serde_json::{json, Value};

pub const PLAN_ID: &str = "1";

pub fn plan(target_amount: i64) -> Plan {
    Plan {
        id: PLAN_ID.to_string(),
        name: "Test Plan".to_string(),
        motive: Some("Test".to_string()),
        target_amount,
        months: 12,
        created_at: "2025-01-01".to_string(),
    }
}

pub fn member(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        plan_id: PLAN_ID.to_string(),
        contribution_per_month: 100_000,
        joined_at: "2025-01-01T00:00:00.000Z".to_string(),
    }
}

pub fn payment(id: &str, amount: i64) -> Payment {
    Payment {
        id: id.to_string(),
        member_id: "m1".to_string(),
        plan_id: PLAN_ID.to_string(),
        amount,
        date: "2025-01-01T10:00:00.000Z".to_string(),
    }
}

/// Plan as the backend serializes it.
pub fn plan_json(target_amount: i64) -> Value {
    json!({
        "id": PLAN_ID,
        "name": "Test Plan",
        "motive": "Test",
        "targetAmount": target_amount,
        "months": 12,
        "createdAt": "2025-01-01"
    })
}

/// Member as the backend serializes it.
pub fn member_json(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "planId": PLAN_ID,
        "contributionPerMonth": 100_000,
        "joinedAt": "2025-01-01T00:00:00.000Z"
    })
}

/// Payment as the backend serializes it.
pub fn payment_json(id: &str, amount: i64) -> Value {
    json!({
        "_id": id,
        "memberId": "m1",
        "planId": PLAN_ID,
        "amount": amount,
        "date": "2025-01-01T10:00:00.000Z"
    })
}
