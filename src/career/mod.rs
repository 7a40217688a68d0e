pub mod job_zone;
pub mod matcher;

pub use job_zone::normalize_job_zone;
pub use matcher::match_code;
