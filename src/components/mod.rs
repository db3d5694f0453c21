//! UI Components
//!
//! Reusable Leptos components.

mod sidebar;
mod top_bar;
mod toast_stack;
mod stat_card;
mod delete_confirm_button;
mod editor_target;
mod modal;
mod form_field;
mod status_badge;
mod export_buttons;
mod bar_chart;
mod page_header;

pub use sidebar::Sidebar;
pub use top_bar::TopBar;
pub use toast_stack::ToastStack;
pub use stat_card::StatCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use modal::Modal;
pub use form_field::{bind_field, FormAlert, SelectField, TextAreaField, TextField};
pub use status_badge::{ActiveBadge, ConditionBadge, StatusBadge};
pub use export_buttons::ExportButtons;
pub use bar_chart::BarChart;
pub use page_header::{EmptyRow, Loading, PageHeader};
