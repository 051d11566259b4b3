pub mod jobs;
pub mod orders;
