mod decision;
mod envelope_decoder;
mod error;
mod publish_service;
mod report;

pub use decision::*;
pub use envelope_decoder::*;
pub use error::*;
pub use publish_service::*;
pub use report::*;
