pub mod normalize;
pub mod percentile;
pub mod rank;

pub use normalize::normalize;
pub use percentile::PercentileTable;
pub use rank::rank;
