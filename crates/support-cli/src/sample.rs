//! Sample ticket data generation for demos and testing.
//!
//! Every generated row satisfies the canonical schema: required fields are
//! always filled, dates are RFC 3339 UTC with millisecond precision, the
//! first response lands after creation, and resolution dates appear only on
//! finished tickets.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use support_model::RawTicketRow;

/// Column order for generated sample files.
pub const SAMPLE_COLUMNS: [&str; 13] = [
    "ticket_id",
    "created_date",
    "assigned_to",
    "priority",
    "status",
    "first_response_date",
    "resolution_date",
    "category",
    "team",
    "customer_tier",
    "escalated",
    "escalation_date",
    "satisfaction_score",
];

const TEAMS: [&str; 4] = ["Technical", "Billing", "General", "Sales"];
const CATEGORIES: [&str; 5] = [
    "Bug",
    "Feature Request",
    "Question",
    "Account Issue",
    "Technical Issue",
];
const PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Critical"];
const STATUSES: [&str; 4] = ["Open", "In Progress", "Resolved", "Closed"];
const CUSTOMER_TIERS: [&str; 3] = ["Free", "Pro", "Enterprise"];
const TEAM_MEMBERS: [&str; 6] = [
    "john.doe@company.com",
    "jane.smith@company.com",
    "mike.wilson@company.com",
    "sarah.jones@company.com",
    "david.brown@company.com",
    "lisa.davis@company.com",
];

/// Generate `count` rows created uniformly over the last thirty days.
pub fn generate_rows(count: usize) -> Vec<RawTicketRow> {
    let end = Utc::now();
    let start = end - Duration::days(30);
    generate_rows_between(count, start, end)
}

/// Generate `count` rows created uniformly inside `[start, end)`.
pub fn generate_rows_between(
    count: usize,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<RawTicketRow> {
    let mut rng = rand::thread_rng();
    (1..=count)
        .map(|id| generate_row(&mut rng, id, start, end))
        .collect()
}

fn generate_row<R: Rng>(
    rng: &mut R,
    id: usize,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> RawTicketRow {
    let span_seconds = (end - start).num_seconds().max(1);
    let created = start + Duration::seconds(rng.gen_range(0..span_seconds));
    let status = choice(rng, &STATUSES);

    let mut row = RawTicketRow::default();
    row.set("ticket_id", &format!("T-2024-{id:03}"));
    row.set("created_date", &timestamp(created));
    row.set("assigned_to", choice(rng, &TEAM_MEMBERS));
    row.set("priority", choice(rng, &PRIORITIES));
    row.set("status", status);
    row.set("category", choice(rng, &CATEGORIES));
    row.set("team", choice(rng, &TEAMS));
    row.set("customer_tier", choice(rng, &CUSTOMER_TIERS));

    // Every ticket gets a first response within a day of creation.
    let response_minutes = rng.gen_range(0..24 * 60);
    row.set(
        "first_response_date",
        &timestamp(created + Duration::minutes(response_minutes)),
    );

    if status == "Resolved" || status == "Closed" {
        let resolution_minutes = response_minutes + 120 + rng.gen_range(0..48 * 60);
        row.set(
            "resolution_date",
            &timestamp(created + Duration::minutes(resolution_minutes)),
        );
    }

    if rng.gen_bool(0.1) {
        row.set("escalated", "true");
        row.set(
            "escalation_date",
            &timestamp(created + Duration::minutes(rng.gen_range(0..12 * 60))),
        );
    } else {
        row.set("escalated", "false");
    }

    if rng.gen_bool(0.8) {
        row.set("satisfaction_score", &rng.gen_range(1..=5).to_string());
    }

    row
}

fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn choice<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_ingest::TicketValidator;

    #[test]
    fn every_generated_row_is_schema_clean() {
        let validator = TicketValidator::new();
        for (idx, row) in generate_rows(50).iter().enumerate() {
            let errors = validator.validate_row(row, idx + 2);
            assert!(errors.is_empty(), "row {idx}: {errors:?}");
        }
    }

    #[test]
    fn ids_are_sequential_and_zero_padded() {
        let ids: Vec<String> = generate_rows(3)
            .iter()
            .map(|row| row.get("ticket_id").unwrap().to_string())
            .collect();
        assert_eq!(ids, ["T-2024-001", "T-2024-002", "T-2024-003"]);
    }

    #[test]
    fn resolution_dates_appear_only_on_finished_tickets() {
        for row in generate_rows(200) {
            let finished = matches!(row.get("status"), Some("Resolved" | "Closed"));
            assert_eq!(row.get("resolution_date").is_some(), finished);
        }
    }

    #[test]
    fn escalation_dates_track_the_flag() {
        for row in generate_rows(200) {
            match row.get("escalated") {
                Some("true") => assert!(row.get("escalation_date").is_some()),
                Some("false") => assert!(row.get("escalation_date").is_none()),
                other => panic!("unexpected escalated value: {other:?}"),
            }
        }
    }

    #[test]
    fn creation_dates_stay_inside_the_window() {
        let start = "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = "2024-03-08T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        for row in generate_rows_between(40, start, end) {
            let created = row
                .get("created_date")
                .and_then(support_ingest::parse_timestamp)
                .unwrap();
            assert!(created >= start && created < end);
        }
    }
}
