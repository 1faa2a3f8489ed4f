//! File I/O, preprocessing, and serialization for the sceneclust pipeline.

mod domain;
mod error;
mod labels;
mod preprocess;
mod reader;
mod report;
mod scale;
mod writer;

pub use domain::{ExperimentName, StatsDataset};
pub use error::IoError;
pub use labels::LabelReader;
pub use preprocess::PreprocessConfig;
pub use reader::StatsReader;
pub use report::AssessReport;
pub use scale::MinMaxScaler;
pub use writer::ResultWriter;
