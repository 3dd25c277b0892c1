// Report browser components, one per file

mod pagination;
mod preview;
mod report_form;
mod search;
mod styles;
mod table;
mod tag_menu;

pub use pagination::Pagination;
pub use preview::PreviewModal;
pub use report_form::ReportFormModal;
pub use search::SearchInput;
pub use styles::APP_CSS;
pub use table::ReportTable;
pub use tag_menu::TagMenu;
