//! Formatting helpers for rendering plans, members and payments.

use crate::api::Member;

/// Shown when a payment references a member that is not loaded.
pub const UNKNOWN_MEMBER: &str = "unknown";

/// Date part (`YYYY-MM-DD`) of an ISO-8601 payment timestamp.
///
/// Strings shorter than ten characters are returned unchanged.
#[must_use]
pub fn payment_date(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// Name of the member with `member_id`, or [`UNKNOWN_MEMBER`].
#[must_use]
pub fn member_name<'a>(members: &'a [Member], member_id: &str) -> &'a str {
    members
        .iter()
        .find(|m| m.id == member_id)
        .map_or(UNKNOWN_MEMBER, |m| m.name.as_str())
}

/// Integer amount as currency with thousands separators (e.g. `$1,250,000`).
#[must_use]
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.into(),
            name: name.into(),
            plan_id: "p1".into(),
            contribution_per_month: 100_000,
            joined_at: "2025-01-01".into(),
        }
    }

    #[test]
    fn test_payment_date_truncates_timestamp() {
        assert_eq!(payment_date("2025-01-15T10:30:00.000Z"), "2025-01-15");
        assert_eq!(payment_date("2025-01-15"), "2025-01-15");
        assert_eq!(payment_date("2025"), "2025");
    }

    #[test]
    fn test_member_name_lookup() {
        let members = vec![member("m1", "Juan"), member("m2", "Ana")];
        assert_eq!(member_name(&members, "m2"), "Ana");
        assert_eq!(member_name(&members, "m9"), UNKNOWN_MEMBER);
    }

    #[test]
    fn amount_formatting_cases() {
        let cases = [
            (0, "$0"),
            (999, "$999"),
            (1_000, "$1,000"),
            (500_000, "$500,000"),
            (1_300_000, "$1,300,000"),
            (-2_500, "-$2,500"),
        ];

        for (amount, expected) in cases {
            assert_eq!(format_amount(amount), expected, "amount {amount}");
        }
    }
}
