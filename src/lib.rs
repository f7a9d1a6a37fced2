//! Expense tracker single-page app: add, list and delete expenses, with
//! monthly and per-category summaries, backed either by browser storage or
//! by the expense HTTP API.

pub mod app;
pub mod components;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod notice;
pub mod sequence;
pub mod settings;
pub mod storage;
pub mod summary;
pub mod view;
