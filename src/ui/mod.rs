pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{faint, field, header, heading, info, notice, Level};
pub use table::saved_jobs_table;
pub use theme::{theme, Theme};
