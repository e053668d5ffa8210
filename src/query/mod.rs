pub mod criteria;
pub mod engine;

pub use criteria::{Criteria, PriceFilter};
pub use engine::filter_tools;
