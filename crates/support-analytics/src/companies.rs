use std::collections::BTreeMap;

use support_model::{CompanyCount, CompanyVolumeReport, CompanyVolumeSummary, Ticket};

use crate::stats::round2;

/// Ticket counts per company, largest first. Tickets without a
/// `company_name` are left out entirely.
pub fn company_volume_report(tickets: &[Ticket]) -> CompanyVolumeReport {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ticket in tickets {
        if let Some(company) = ticket.company_name.as_deref() {
            *counts.entry(company).or_insert(0) += 1;
        }
    }

    let mut companies: Vec<CompanyCount> = counts
        .into_iter()
        .map(|(company, tickets)| CompanyCount {
            company: company.to_string(),
            tickets,
        })
        .collect();
    companies.sort_by(|a, b| {
        b.tickets
            .cmp(&a.tickets)
            .then_with(|| a.company.cmp(&b.company))
    });

    let counted: usize = companies.iter().map(|entry| entry.tickets).sum();
    let summary = CompanyVolumeSummary {
        total_companies: companies.len(),
        top_company: companies.first().map(|entry| entry.company.clone()),
        top_company_tickets: companies.first().map(|entry| entry.tickets).unwrap_or(0),
        average_per_company: if companies.is_empty() {
            0.0
        } else {
            round2(counted as f64 / companies.len() as f64)
        },
    };

    CompanyVolumeReport { companies, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ticket;
    use support_model::Ticket;

    fn from_company(id: &str, company: Option<&str>) -> Ticket {
        Ticket {
            company_name: company.map(str::to_string),
            ..ticket(id, "2024-01-15T08:00:00Z")
        }
    }

    #[test]
    fn counts_sort_descending_with_name_ties() {
        let tickets = vec![
            from_company("T-1", Some("Acme")),
            from_company("T-2", Some("Globex")),
            from_company("T-3", Some("Globex")),
            from_company("T-4", Some("Initech")),
            from_company("T-5", None),
        ];

        let report = company_volume_report(&tickets);
        assert_eq!(
            report
                .companies
                .iter()
                .map(|entry| (entry.company.as_str(), entry.tickets))
                .collect::<Vec<_>>(),
            vec![("Globex", 2), ("Acme", 1), ("Initech", 1)]
        );

        assert_eq!(report.summary.total_companies, 3);
        assert_eq!(report.summary.top_company.as_deref(), Some("Globex"));
        assert_eq!(report.summary.top_company_tickets, 2);
        // 4 attributed tickets over 3 companies.
        assert_eq!(report.summary.average_per_company, 1.33);
    }

    #[test]
    fn no_company_data_yields_empty_report() {
        let tickets = vec![from_company("T-1", None)];
        let report = company_volume_report(&tickets);
        assert!(report.companies.is_empty());
        assert_eq!(report.summary.total_companies, 0);
        assert_eq!(report.summary.top_company, None);
        assert_eq!(report.summary.top_company_tickets, 0);
        assert_eq!(report.summary.average_per_company, 0.0);
    }
}
