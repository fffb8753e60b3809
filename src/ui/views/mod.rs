//! Screens for each stage of the portfolio

pub mod contact_form;
pub mod frame;
pub mod loading;
pub mod page;
pub mod welcome;

pub use contact_form::{ContactFormView, FormFocus, Notice};
pub use page::{PageLayout, PageStyle};
