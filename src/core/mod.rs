pub mod fetch;
pub mod samples;

pub use crate::domain::model::{DevfileType, Git, Sample};
pub use crate::domain::ports::{ConfigProvider, SampleSource};
pub use crate::utils::error::Result;
