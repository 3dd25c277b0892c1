//! CSS for the report browser, injected as a `<style>` element by the
//! application shell.

/// Complete stylesheet - light theme, rounded chips, inline validation.
pub const APP_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-soft: #f3f4f6;
    --text-main: #1f2937;
    --text-dim: #6b7280;
    --border: #e5e7eb;
    --primary: #1677ff;
    --primary-dark: #0958d9;
    --teal: #14b8a6;
    --amber: #eab308;
    --violet: #9333ea;
    --blue: #3b82f6;
    --red: #ef4444;
    --sky-bg: #e0f2fe;
    --sky-text: #0369a1;
    --sky-border: #38bdf8;
    --radius: 6px;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.5;
    margin: 0;
}

.page {
    max-width: 1080px;
    margin: 0 auto;
    padding: 20px;
}

.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.page-title {
    font-size: 20px;
    font-weight: 600;
    margin: 0;
}

/* Buttons */

.btn {
    border: none;
    border-radius: var(--radius);
    padding: 6px 16px;
    font-size: 14px;
    cursor: pointer;
    transition: background-color 150ms;
}

.btn-primary {
    background: var(--primary);
    color: #ffffff;
}

.btn-primary:hover,
.btn-primary.active {
    background: var(--primary-dark);
}

.btn-block {
    width: 100%;
    padding: 8px 16px;
    margin-top: 16px;
}

/* Tag filter menu */

.tag-menu {
    position: relative;
    display: inline-block;
    margin-bottom: 16px;
}

.caret {
    font-size: 11px;
}

.tag-menu-list {
    display: none;
    position: absolute;
    top: calc(100% + 4px);
    left: 0;
    z-index: 20;
    min-width: 200px;
    background: var(--bg-page);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08);
    padding: 4px;
}

.tag-menu-list.open {
    display: block;
}

.tag-option {
    display: block;
    width: 100%;
    text-align: left;
    background: var(--bg-soft);
    color: var(--text-dim);
    border: none;
    border-radius: 999px;
    padding: 5px 12px;
    margin: 4px 0;
    font-size: 13px;
    cursor: pointer;
}

.tag-option.selected {
    background: var(--teal);
    color: #ffffff;
}

/* Chips */

.chip {
    display: inline-flex;
    align-items: center;
    gap: 4px;
    border-radius: var(--radius);
    padding: 2px 8px;
    margin: 0 4px 4px 0;
    font-size: 12px;
    color: #ffffff;
}

.chip-amber { background: var(--amber); }
.chip-violet { background: var(--violet); }
.chip-blue { background: var(--blue); }

.selected-tags {
    min-height: 28px;
    margin-bottom: 16px;
}

.chip-selected {
    background: var(--teal);
    border-radius: 999px;
    padding: 4px 12px;
}

.chip-close {
    background: none;
    border: none;
    color: inherit;
    font-size: 13px;
    line-height: 1;
    padding: 0;
    cursor: pointer;
}

/* Search */

.search-box {
    position: relative;
    width: 288px;
    margin-bottom: 16px;
}

.search-icon {
    position: absolute;
    left: 12px;
    top: 50%;
    transform: translateY(-50%);
    color: #9ca3af;
    display: inline-flex;
}

.search-input {
    width: 100%;
    background: var(--bg-soft);
    border: 1px solid transparent;
    border-radius: var(--radius);
    padding: 8px 16px 8px 34px;
    font-size: 14px;
}

.search-input:focus {
    outline: none;
    border-color: var(--primary);
    background: var(--bg-page);
}

/* Table */

.report-table {
    width: 100%;
    border-collapse: collapse;
    border-radius: 8px;
    overflow: hidden;
}

.report-table th,
.report-table td {
    text-align: left;
    padding: 10px 12px;
    border-bottom: 1px solid var(--border);
    font-size: 14px;
}

.report-table th {
    background: var(--bg-soft);
    color: var(--text-dim);
    font-weight: 500;
    user-select: none;
}

th.sortable {
    cursor: pointer;
}

.sort-indicator {
    display: inline-block;
    min-width: 14px;
    margin-left: 4px;
    font-size: 10px;
    color: var(--primary);
}

.cell-name {
    font-weight: 600;
}

.col-actions,
.cell-actions {
    width: 48px;
    position: relative;
}

.action-trigger {
    background: none;
    border: none;
    font-size: 18px;
    cursor: pointer;
    color: var(--text-dim);
}

.action-menu {
    display: none;
    position: absolute;
    right: 8px;
    top: calc(100% - 8px);
    z-index: 20;
    background: var(--bg-page);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08);
    min-width: 120px;
    padding: 4px 0;
}

.action-menu.open {
    display: block;
}

.action-menu button {
    display: block;
    width: 100%;
    text-align: left;
    background: none;
    border: none;
    padding: 6px 14px;
    font-size: 13px;
    cursor: pointer;
}

.action-menu button:hover {
    background: var(--bg-soft);
}

.muted {
    color: var(--text-dim);
    text-align: center;
    padding: 16px 0;
}

/* Pagination */

.pagination {
    display: flex;
    justify-content: flex-end;
    align-items: center;
    gap: 4px;
    margin-top: 16px;
}

.page-step,
.page-pill {
    background: var(--bg-page);
    color: var(--text-dim);
    border: 1px solid transparent;
    border-radius: var(--radius);
    padding: 4px 12px;
    font-size: 13px;
    cursor: pointer;
    transition: color 150ms, background-color 150ms;
}

.page-step:disabled {
    color: var(--border);
    cursor: default;
}

.page-pill.active {
    background: var(--sky-bg);
    color: var(--sky-text);
    border-color: var(--sky-border);
    border-radius: 999px;
}

/* Modal */

.modal-overlay {
    position: fixed;
    inset: 0;
    z-index: 50;
    background: rgba(0, 0, 0, 0.45);
    display: flex;
    align-items: flex-start;
    justify-content: center;
    padding-top: 10vh;
}

.modal {
    background: var(--bg-page);
    border-radius: 8px;
    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
    width: 420px;
    max-width: calc(100vw - 32px);
    padding: 20px;
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.modal-title {
    font-size: 16px;
    font-weight: 600;
    margin: 0;
}

.modal-close {
    background: none;
    border: none;
    font-size: 18px;
    color: var(--text-dim);
    cursor: pointer;
}

/* Form fields */

.field {
    margin-bottom: 16px;
}

.field-label {
    display: block;
    font-weight: 600;
    margin-bottom: 8px;
    font-size: 14px;
}

.field-input {
    width: 100%;
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 8px 14px;
    font-size: 14px;
}

.field-input:focus {
    outline: none;
    border-color: var(--primary);
}

.field-input.invalid {
    border-color: var(--red);
}

.field-error {
    color: var(--red);
    font-size: 12px;
    margin-top: 4px;
    min-height: 14px;
}

/* Preview */

.preview-fields {
    display: grid;
    grid-template-columns: 90px 1fr;
    row-gap: 10px;
    margin: 0;
}

.preview-fields dt {
    color: var(--text-dim);
    font-size: 13px;
}

.preview-fields dd {
    margin: 0;
    font-size: 14px;
}
"#;
