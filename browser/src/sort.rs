//! Presentation-layer column sorting.
//!
//! Sorting is table state, not controller state: the table holds the
//! active [`SortState`] and applies it to the visible subset before page
//! slicing. Both comparators are stable, so rows that compare equal keep
//! their dataset order, and `None` leaves the subset untouched.

use std::cmp::Ordering;

use crate::types::Report;

/// Columns that offer a sort affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    /// Campaign name, case-insensitive.
    Name,
    /// Campaign date.
    Date,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Active sort: a column and direction, or `None` for dataset order.
pub type SortState = Option<(SortColumn, SortDirection)>;

/// The state after clicking `column`'s header: ascending, then descending,
/// then back to unsorted. Clicking a different column always starts over
/// at ascending.
pub fn cycle(current: SortState, column: SortColumn) -> SortState {
    match current {
        Some((col, SortDirection::Ascending)) if col == column => {
            Some((column, SortDirection::Descending))
        }
        Some((col, SortDirection::Descending)) if col == column => None,
        _ => Some((column, SortDirection::Ascending)),
    }
}

// Lowercase fold with a raw tie-break keeps the ordering deterministic for
// names that differ only by case.
fn compare_names(a: &Report, b: &Report) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort `rows` in place according to `sort`. Stable in every state.
pub fn sort_rows(rows: &mut [Report], sort: SortState) {
    let Some((column, direction)) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Name => compare_names(a, b),
            SortColumn::Date => a.date.cmp(&b.date),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::seed_reports;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn row(key: &str, name: &str, date: (i32, u32, u32)) -> Report {
        Report {
            key: key.into(),
            name: name.into(),
            tags: Vec::new(),
            contain: "Link".into(),
            level: "Normal".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            scenario: String::new(),
        }
    }

    #[test]
    fn date_ascending_orders_january_before_march() {
        let mut rows = vec![row("a", "March", (2023, 3, 10)), row("b", "January", (2023, 1, 1))];
        sort_rows(&mut rows, Some((SortColumn::Date, SortDirection::Ascending)));
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut rows = vec![
            row("a", "zebra Campaign", (2023, 1, 1)),
            row("b", "Alpha Campaign", (2023, 1, 2)),
            row("c", "beta Campaign", (2023, 1, 3)),
        ];
        sort_rows(&mut rows, Some((SortColumn::Name, SortDirection::Ascending)));
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["b", "c", "a"]);
    }

    #[test]
    fn equal_keys_keep_dataset_order_in_both_directions() {
        let mut rows = vec![
            row("a", "Same", (2023, 5, 5)),
            row("b", "Same", (2023, 5, 5)),
            row("c", "Same", (2023, 5, 5)),
        ];
        sort_rows(&mut rows, Some((SortColumn::Date, SortDirection::Ascending)));
        let asc: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(asc, ["a", "b", "c"]);

        sort_rows(&mut rows, Some((SortColumn::Date, SortDirection::Descending)));
        let desc: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(desc, ["a", "b", "c"]);
    }

    #[test]
    fn none_leaves_rows_untouched() {
        let mut rows = seed_reports();
        let before: Vec<_> = rows.iter().map(|r| r.key.clone()).collect();
        sort_rows(&mut rows, None);
        let after: Vec<_> = rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn header_clicks_cycle_through_three_states() {
        let s0 = None;
        let s1 = cycle(s0, SortColumn::Date);
        assert_eq!(s1, Some((SortColumn::Date, SortDirection::Ascending)));
        let s2 = cycle(s1, SortColumn::Date);
        assert_eq!(s2, Some((SortColumn::Date, SortDirection::Descending)));
        let s3 = cycle(s2, SortColumn::Date);
        assert_eq!(s3, None);
    }

    #[test]
    fn switching_columns_restarts_at_ascending() {
        let date_desc = Some((SortColumn::Date, SortDirection::Descending));
        assert_eq!(
            cycle(date_desc, SortColumn::Name),
            Some((SortColumn::Name, SortDirection::Ascending))
        );
    }
}
