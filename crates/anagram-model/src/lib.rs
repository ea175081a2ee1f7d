pub mod error;
pub mod mode;
pub mod report;

pub use error::{AnagramError, Result};
pub use mode::ModeId;
pub use report::CheckReport;
