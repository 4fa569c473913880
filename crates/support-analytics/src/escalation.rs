use std::collections::BTreeMap;

use support_model::{EscalationGroup, EscalationReport, EscalationSummary, Priority, Ticket};

use crate::stats::{mean, percent, round2};

/// Escalation patterns over the tickets flagged `escalated`, grouped by team,
/// priority, and category. Each group rate is measured against every ticket
/// in that group, escalated or not; groups without any escalation are not
/// listed.
pub fn escalation_report(tickets: &[Ticket]) -> EscalationReport {
    let mut by_team: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_priority: BTreeMap<Priority, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut hours: Vec<f64> = Vec::new();
    let mut escalated_total = 0;

    for ticket in tickets.iter().filter(|ticket| ticket.escalated) {
        escalated_total += 1;
        *by_team.entry(ticket.team.as_str()).or_insert(0) += 1;
        *by_priority.entry(ticket.priority).or_insert(0) += 1;
        *by_category.entry(ticket.category.as_str()).or_insert(0) += 1;
        if let Some(elapsed) = ticket.escalation_hours() {
            hours.push(elapsed);
        }
    }

    let by_team = by_team
        .into_iter()
        .map(|(team, escalated)| EscalationGroup {
            group: team.to_string(),
            escalated,
            rate: percent(escalated, tickets.iter().filter(|t| t.team == team).count()),
        })
        .collect();
    let by_priority = by_priority
        .into_iter()
        .map(|(priority, escalated)| EscalationGroup {
            group: priority.as_str().to_string(),
            escalated,
            rate: percent(escalated, tickets.iter().filter(|t| t.priority == priority).count()),
        })
        .collect();
    let by_category = by_category
        .into_iter()
        .map(|(category, escalated)| EscalationGroup {
            group: category.to_string(),
            escalated,
            rate: percent(escalated, tickets.iter().filter(|t| t.category == category).count()),
        })
        .collect();

    let summary = EscalationSummary {
        total_escalated: escalated_total,
        escalation_rate: percent(escalated_total, tickets.len()),
        average_hours_to_escalation: round2(mean(&hours)),
    };

    EscalationReport {
        by_team,
        by_priority,
        by_category,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{instant, ticket};

    fn escalated(id: &str, team: &str, priority: Priority, when: Option<&str>) -> Ticket {
        Ticket {
            team: team.to_string(),
            priority,
            escalated: true,
            escalation_date: when.map(instant),
            ..ticket(id, "2024-01-15T08:00:00Z")
        }
    }

    fn plain(id: &str, team: &str) -> Ticket {
        Ticket {
            team: team.to_string(),
            ..ticket(id, "2024-01-15T08:00:00Z")
        }
    }

    #[test]
    fn group_rates_use_the_full_group_as_denominator() {
        let tickets = vec![
            escalated("T-1", "Engineering", Priority::Critical, Some("2024-01-15T12:00:00Z")),
            escalated("T-2", "Engineering", Priority::High, None),
            plain("T-3", "Engineering"),
            plain("T-4", "Engineering"),
            plain("T-5", "Billing"),
        ];

        let report = escalation_report(&tickets);

        assert_eq!(report.by_team.len(), 1);
        assert_eq!(report.by_team[0].group, "Engineering");
        assert_eq!(report.by_team[0].escalated, 2);
        // 2 escalations over 4 Engineering tickets.
        assert_eq!(report.by_team[0].rate, 50);

        let priorities: Vec<(&str, u32)> = report
            .by_priority
            .iter()
            .map(|entry| (entry.group.as_str(), entry.rate))
            .collect();
        assert_eq!(priorities, vec![("High", 100), ("Critical", 100)]);

        assert_eq!(report.summary.total_escalated, 2);
        assert_eq!(report.summary.escalation_rate, 40);
        // Only T-1 carries an escalation timestamp (4h after creation).
        assert_eq!(report.summary.average_hours_to_escalation, 4.0);
    }

    #[test]
    fn mean_escalation_hours_come_from_raw_durations() {
        let tickets = vec![
            escalated("T-1", "Support", Priority::High, Some("2024-01-15T09:40:00Z")),
            escalated("T-2", "Support", Priority::High, Some("2024-01-15T11:20:00Z")),
        ];

        // 1.6666..h and 3.3333..h average to exactly 2.5 before rounding.
        let report = escalation_report(&tickets);
        assert_eq!(report.summary.average_hours_to_escalation, 2.5);
    }

    #[test]
    fn no_escalations_yields_empty_groups() {
        let tickets = vec![plain("T-1", "Support")];
        let report = escalation_report(&tickets);
        assert!(report.by_team.is_empty());
        assert!(report.by_priority.is_empty());
        assert!(report.by_category.is_empty());
        assert_eq!(report.summary.total_escalated, 0);
        assert_eq!(report.summary.escalation_rate, 0);
        assert_eq!(report.summary.average_hours_to_escalation, 0.0);
    }
}
