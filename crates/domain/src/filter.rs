pub mod facet;
pub mod range;
pub mod state;
mod toggle;

pub use facet::{FacetSet, Inclusion, TriStateFacet};
pub use range::{ClosedRange, DEFAULT_YEAR_RANGE, FULL_SCORE_RANGE, SCORE_MAX, SCORE_MIN, ScoreRange, YearRange};
pub use state::FilterState;
