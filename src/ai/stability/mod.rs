pub mod format;
pub mod ultra;

pub use format::OutputFormat;
pub use ultra::UltraRequestBody;
