pub mod summary;

pub use summary::{RULER, print_run, summary_text};
