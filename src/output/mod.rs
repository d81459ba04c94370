mod format;
mod results;

pub(crate) use results::{render_choices, render_dates, render_search, render_selection};
