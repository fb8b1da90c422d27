//! Input forms.

mod crawling_form;

pub use crawling_form::{CrawlingForm, FormError, FormFields};
