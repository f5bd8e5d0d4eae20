pub use chart::{Chart, NearMiss};
pub use entry::CodePointEntry;
pub use error::ChartError;
pub use matcher::{match_line, LineMatch};
pub use sanitize::sanitize_name;
pub use script::{is_printable_latin, is_thai, string_is_thai};

mod chart;
mod entry;
mod error;
mod matcher;
mod sanitize;
mod script;

/// откуда берутся данные таблицы символов
pub const CHART_SOURCE_URL: &str = "https://www.unicode.org/charts/PDF/U0E00.pdf";
