pub mod error;
mod metadata;
mod optimize;
mod pipeline;
mod policy;

pub use error::IngestError;
pub use metadata::extract_metadata;
pub use optimize::{OptimizedImage, optimize};
pub use pipeline::{IngestPipeline, IngestReceipt, PhotoReceipt, RawFile};
pub use policy::OptimizePolicy;
