//! Results rendering.
//!
//! Pure formatting from result sets to display tables. Writing those tables
//! to a terminal lives in `infrastructure::terminal`.

mod format;
mod table;

pub use format::{
    format_area, format_date, format_delta, format_fixed, format_number, format_percent,
    format_rating, format_won, tone_of,
};
pub use table::{Cell, EMPTY_RESULTS_MESSAGE, RenderedResults, Tone, render_results};
