//! Compiled-in seed data.
//!
//! The browser ships with a fixed set of reports loaded once at startup;
//! there is no persistence layer behind them. Twelve rows keep the derived
//! pagination honest (two pages at the default page size).

use chrono::NaiveDate;

use crate::types::Report;

/// Tags offered by the filter dropdown, in menu order.
pub const TAG_OPTIONS: &[&str] = &[
    "Banking",
    "Job offers",
    "Packages",
    "Invoice",
    "Network management",
    "Analytics team",
];

/// The reports loaded at startup.
pub fn seed_reports() -> Vec<Report> {
    vec![
        report(
            "1",
            "Foreign Bid Acquisition",
            &["BEC", "Banking", "CEO", "User account", "Job offers"],
            "Link",
            "Normal",
            (2023, 3, 10),
            "Urgent acquisition bid forwarded from a foreign partner",
        ),
        report(
            "2",
            "Quarterly Invoice Reminder",
            &["Invoice", "Banking"],
            "Attachment",
            "High",
            (2023, 1, 1),
            "Overdue invoice with a spoofed accounts-payable sender",
        ),
        report(
            "3",
            "Parcel Redelivery Notice",
            &["Packages", "User account"],
            "Link",
            "Normal",
            (2023, 2, 14),
            "Failed delivery notice asking to reschedule via a tracking link",
        ),
        report(
            "4",
            "Payroll Update Request",
            &["BEC", "CEO"],
            "Link",
            "High",
            (2023, 4, 2),
            "Executive impersonation asking HR to reroute salary deposits",
        ),
        report(
            "5",
            "VPN Certificate Renewal",
            &["Network management"],
            "Attachment",
            "Normal",
            (2023, 2, 28),
            "IT notice bundling a fake certificate installer",
        ),
        report(
            "6",
            "Benefits Enrollment Window",
            &["User account", "Job offers"],
            "Link",
            "Low",
            (2023, 3, 22),
            "Open-enrollment reminder harvesting portal credentials",
        ),
        report(
            "7",
            "GDPR Policy Acknowledgement",
            &["Data Protection", "User account"],
            "Link",
            "Normal",
            (2023, 5, 5),
            "Compliance sign-off form behind a cloned intranet page",
        ),
        report(
            "8",
            "Analytics Dashboard Invite",
            &["Analytics team", "User account"],
            "Link",
            "Low",
            (2023, 4, 18),
            "Shared-dashboard invitation pointing at a look-alike login",
        ),
        report(
            "9",
            "Wire Transfer Confirmation",
            &["BEC", "Banking", "CEO"],
            "Attachment",
            "High",
            (2023, 5, 19),
            "CFO impersonation confirming a pending wire with attached form",
        ),
        report(
            "10",
            "Password Expiry Notice",
            &["User account", "Network management"],
            "Link",
            "Normal",
            (2023, 6, 1),
            "Helpdesk notice pushing an immediate password reset",
        ),
        report(
            "11",
            "Recruiter Connection Request",
            &["Job offers"],
            "Link",
            "Low",
            (2023, 6, 12),
            "Recruiter outreach with an offer letter behind a login wall",
        ),
        report(
            "12",
            "Shared Invoice Folder",
            &["Invoice", "Analytics team"],
            "Link",
            "Normal",
            (2023, 7, 4),
            "Cloud-drive share of an invoice folder requesting sign-in",
        ),
    ]
}

fn report(
    key: &str,
    name: &str,
    tags: &[&str],
    contain: &str,
    level: &str,
    (y, m, d): (i32, u32, u32),
    scenario: &str,
) -> Report {
    Report {
        key: key.into(),
        name: name.into(),
        tags: tags.iter().map(|t| (*t).into()).collect(),
        contain: contain.into(),
        level: level.into(),
        date: NaiveDate::from_ymd_opt(y, m, d).expect("seed date is a valid calendar date"),
        scenario: scenario.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn seed_keys_are_unique() {
        let rows = seed_reports();
        let keys: BTreeSet<_> = rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys.len(), rows.len());
    }

    #[test]
    fn seed_spans_more_than_one_page() {
        assert!(seed_reports().len() > crate::view::PAGE_SIZE);
    }

    #[test]
    fn every_dropdown_tag_matches_at_least_one_row() {
        let rows = seed_reports();
        for tag in TAG_OPTIONS {
            assert!(
                rows.iter().any(|r| r.tags.iter().any(|t| t == tag)),
                "no seed row carries {tag:?}"
            );
        }
    }
}
