mod country;
mod engine;
mod query;

pub use country::normalize_country;
pub use engine::{selected_hole_totals, tee_totals, total_yardage, SearchEngine, SearchHit};
pub use query::{parse_hole_selection, Query, QueryError, YardageRange};
