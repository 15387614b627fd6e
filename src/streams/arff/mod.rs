mod arff_file_source;
mod arff_file_stream;
mod parser;

pub use arff_file_source::ArffFileSource;
pub use arff_file_stream::ArffFileStream;
pub use parser::MISSING_VALUE;
