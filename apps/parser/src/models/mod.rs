pub mod record;
pub mod summary;

pub use record::ResumeRecord;
pub use summary::ResumeSummary;
