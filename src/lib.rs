pub mod error;
pub mod match_data;
pub mod match_text;
pub mod penalty;
pub mod pipeline;
pub mod schema;
pub mod season;
pub mod source_csv;
