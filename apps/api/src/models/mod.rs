pub mod career;
pub mod personality;
pub mod report;
pub mod submission;
