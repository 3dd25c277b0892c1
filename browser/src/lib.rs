//! # report-browser
//!
//! Data-view core for the Phishdeck report browser.
//!
//! This crate owns everything behind the single-page UI that is not a
//! widget: the report row model, the compiled-in seed dataset, the
//! data-view controller (search, multi-tag filtering, derived pagination),
//! presentation-layer column sorting, and the report-creation form state
//! machine with its validation rules. It is deliberately UI-free so every
//! behavior can be unit tested without a browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use report_browser::{seed_reports, DataView};
//!
//! let mut view = DataView::new(seed_reports());
//! view.set_search_text("invoice");
//! view.toggle_tag("Invoice");
//!
//! // Case-insensitive name search AND tag-superset filtering.
//! let visible = view.visible_rows();
//! assert!(!visible.is_empty());
//! assert!(visible.iter().all(|r| r.tags.iter().any(|t| t == "Invoice")));
//!
//! // Pagination total derives from the filtered subset.
//! assert_eq!(view.total(), visible.len());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - the report row model and tag display tones
//! - [`dataset`] - compiled-in seed rows and the filter tag vocabulary
//! - [`view`] - the [`DataView`] controller: filters, pagination, mutation
//! - [`sort`] - stable column sorting, held by the table layer
//! - [`form`] - draft, validation, and submit for the report modal
//!
//! All operations are total functions over in-memory state: no I/O, no
//! async, no failure modes beyond per-field validation messages.

#![doc(html_root_url = "https://docs.rs/report-browser/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod form;
pub mod sort;
pub mod types;
pub mod view;

pub use dataset::{seed_reports, TAG_OPTIONS};
pub use types::{tag_tone, Report, TagTone};
pub use view::{DataView, PAGE_SIZE};
