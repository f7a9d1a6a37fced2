pub mod expense_form;
pub mod expense_page;
pub mod expense_table;
pub mod layout;
pub mod notice;
pub mod settings_page;
pub mod summary_page;
