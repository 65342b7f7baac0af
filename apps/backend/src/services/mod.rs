pub mod sessions;

pub use sessions::{PairResult, RegionSummary, SessionService};
