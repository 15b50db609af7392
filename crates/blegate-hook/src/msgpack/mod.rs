mod report_deserializer;

pub use report_deserializer::*;
