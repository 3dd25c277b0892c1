//! The data-view controller: search, tag filtering, derived pagination.
//!
//! [`DataView`] owns the dataset and the active filter/pagination state.
//! Filtering is an order-preserving linear scan; pagination is fully
//! derived from the filtered subset, so the page index can never point
//! past the last page. Column sorting deliberately lives elsewhere
//! ([`crate::sort`]) - it is presentation state, not controller state.

use crate::form::Submission;
use crate::types::Report;

/// Rows shown per page. Fixed; there is no page-size chooser.
pub const PAGE_SIZE: usize = 10;

/// Owns the dataset plus search text, selected tags, and the current page.
///
/// All mutation entry points reclamp the page, keeping the invariant
/// `1 <= current_page() <= page_count()` without any caller discipline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataView {
    rows: Vec<Report>,
    search: String,
    selected_tags: Vec<String>,
    page: usize,
}

impl DataView {
    /// Controller over `rows`, with no filters active and page 1 current.
    pub fn new(rows: Vec<Report>) -> Self {
        Self {
            rows,
            search: String::new(),
            selected_tags: Vec::new(),
            page: 1,
        }
    }

    /// The active search string.
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Selected filter tags, in the order they were toggled on.
    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// The full dataset, in declaration order.
    pub fn rows(&self) -> &[Report] {
        &self.rows
    }

    /// The row with identity `key`, if it exists.
    pub fn row(&self, key: &str) -> Option<&Report> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Replace the active search string and reclamp the page.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.clamp_page();
    }

    /// Toggle `tag` in the selected set: remove it if present, append it
    /// otherwise. Toggling twice restores the prior selection.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_owned());
        }
        self.clamp_page();
    }

    fn matches(&self, row: &Report) -> bool {
        let matches_search = row
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_tags = self.selected_tags.iter().all(|t| row.tags.contains(t));
        matches_search && matches_tags
    }

    /// Rows passing the active search AND all selected tags (superset
    /// semantics), preserving dataset order. An empty selection matches
    /// every row.
    pub fn visible_rows(&self) -> Vec<Report> {
        self.rows
            .iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect()
    }

    /// Number of rows passing the active filters.
    pub fn total(&self) -> usize {
        self.rows.iter().filter(|row| self.matches(row)).count()
    }

    /// Number of pages for the current filters; at least 1.
    pub fn page_count(&self) -> usize {
        self.total().div_ceil(PAGE_SIZE).max(1)
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Jump to `page`, clamped into `1..=page_count()`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// The current page's rows, taken from an already-sorted copy of the
    /// visible subset so pages stay coherent under column sorting.
    pub fn page_slice(&self, sorted_visible: &[Report]) -> Vec<Report> {
        sorted_visible
            .iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Finalize `submission` into a new report row and append it.
    pub fn add_row(&mut self, submission: &Submission) {
        let key = self.next_key();
        self.rows.push(submission.to_report(key));
        self.clamp_page();
    }

    /// Update the row with identity `key` from `submission`, in place.
    ///
    /// Only the fields the form collects change (name, scenario, date);
    /// tags, payload, and level stay as they were. Unknown keys are a
    /// no-op - rows are never deleted, so a stale key cannot occur through
    /// the UI.
    pub fn apply_edit(&mut self, key: &str, submission: &Submission) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.name = submission.name.clone();
            row.scenario = submission.scenario.clone();
            row.date = submission.start_date;
        }
    }

    fn next_key(&self) -> String {
        let max = self
            .rows
            .iter()
            .filter_map(|r| r.key.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::seed_reports;
    use crate::form::Submission;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn view() -> DataView {
        DataView::new(seed_reports())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let mut v = view();
        v.set_search_text("INVOICE");
        let names: Vec<_> = v.visible_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Quarterly Invoice Reminder", "Shared Invoice Folder"]
        );
    }

    #[test]
    fn empty_search_and_empty_selection_match_everything() {
        let v = view();
        assert_eq!(v.visible_rows().len(), v.rows().len());
        assert_eq!(v.total(), v.rows().len());
    }

    #[test]
    fn selected_tags_use_superset_semantics_not_any() {
        // Row 1 is tagged [BEC, Banking, CEO, User account, Job offers].
        let mut v = view();
        v.toggle_tag("Banking");
        v.toggle_tag("CEO");
        assert!(v.visible_rows().iter().any(|r| r.key == "1"));

        let mut v = view();
        v.toggle_tag("Banking");
        v.toggle_tag("Packages");
        // No row carries both, least of all row 1.
        assert!(!v.visible_rows().iter().any(|r| r.key == "1"));
        assert_eq!(v.total(), 0);
    }

    #[test]
    fn search_and_tags_compose_with_and() {
        let mut v = view();
        v.set_search_text("invoice");
        v.toggle_tag("Analytics team");
        let names: Vec<_> = v.visible_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Shared Invoice Folder"]);
    }

    #[test]
    fn double_toggle_restores_the_selection() {
        let mut v = view();
        v.toggle_tag("Banking");
        let before = v.selected_tags().to_vec();
        v.toggle_tag("Invoice");
        v.toggle_tag("Invoice");
        assert_eq!(v.selected_tags(), before.as_slice());
    }

    #[test]
    fn selection_preserves_insertion_order() {
        let mut v = view();
        v.toggle_tag("Invoice");
        v.toggle_tag("Banking");
        v.toggle_tag("Packages");
        v.toggle_tag("Banking");
        assert_eq!(v.selected_tags(), ["Invoice", "Packages"]);
    }

    #[test]
    fn filtering_preserves_dataset_order() {
        let mut v = view();
        v.toggle_tag("User account");
        let keys: Vec<_> = v.visible_rows().into_iter().map(|r| r.key).collect();
        assert_eq!(keys, ["1", "3", "6", "7", "8", "10"]);
    }

    #[test]
    fn pagination_total_derives_from_filters() {
        let mut v = view();
        assert_eq!(v.page_count(), 2);
        v.set_page(2);
        assert_eq!(v.current_page(), 2);

        // Narrowing the filter collapses to one page and reclamps.
        v.set_search_text("wire");
        assert_eq!(v.total(), 1);
        assert_eq!(v.page_count(), 1);
        assert_eq!(v.current_page(), 1);
    }

    #[test]
    fn set_page_clamps_both_ends() {
        let mut v = view();
        v.set_page(0);
        assert_eq!(v.current_page(), 1);
        v.set_page(99);
        assert_eq!(v.current_page(), 2);
    }

    #[test]
    fn zero_matches_still_leaves_one_page() {
        let mut v = view();
        v.set_search_text("no such campaign");
        assert_eq!(v.total(), 0);
        assert_eq!(v.page_count(), 1);
        assert_eq!(v.current_page(), 1);
        assert_eq!(v.page_slice(&v.visible_rows()), vec![]);
    }

    #[test]
    fn page_slice_windows_the_sorted_subset() {
        let mut v = view();
        let visible = v.visible_rows();
        assert_eq!(v.page_slice(&visible).len(), PAGE_SIZE);
        v.set_page(2);
        let second: Vec<_> = v.page_slice(&visible).into_iter().map(|r| r.key).collect();
        assert_eq!(second, ["11", "12"]);
    }

    fn submission(name: &str) -> Submission {
        Submission {
            name: name.into(),
            scenario: "Credential harvest behind a shared document".into(),
            start_date: date(2023, 8, 1),
            end_date: date(2023, 8, 15),
        }
    }

    #[test]
    fn add_row_appends_with_a_fresh_key() {
        let mut v = view();
        v.add_row(&submission("Docusign Signature Request"));
        let last = v.rows().last().unwrap();
        assert_eq!(last.key, "13");
        assert_eq!(last.name, "Docusign Signature Request");
        assert_eq!(last.date, date(2023, 8, 1));
        // The new row is immediately part of the filtered view.
        v.set_search_text("docusign");
        assert_eq!(v.total(), 1);
    }

    #[test]
    fn add_row_keys_stay_unique_across_many_adds() {
        let mut v = view();
        v.add_row(&submission("A"));
        v.add_row(&submission("B"));
        let mut keys: Vec<_> = v.rows().iter().map(|r| r.key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), v.rows().len());
    }

    #[test]
    fn apply_edit_updates_in_place_and_preserves_position() {
        let mut v = view();
        let keys_before: Vec<_> = v.rows().iter().map(|r| r.key.clone()).collect();
        v.apply_edit("3", &submission("Parcel Pickup Deadline"));

        let keys_after: Vec<_> = v.rows().iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys_before, keys_after);

        let row = v.row("3").unwrap();
        assert_eq!(row.name, "Parcel Pickup Deadline");
        assert_eq!(row.date, date(2023, 8, 1));
        // Fields the form does not collect are untouched.
        assert_eq!(row.tags, ["Packages", "User account"]);
        assert_eq!(row.contain, "Link");
        assert_eq!(row.level, "Normal");
    }

    #[test]
    fn apply_edit_with_unknown_key_is_a_noop() {
        let mut v = view();
        let before = v.clone();
        v.apply_edit("999", &submission("Ghost"));
        assert_eq!(v, before);
    }
}
