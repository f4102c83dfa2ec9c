pub mod catalog;
pub mod facts;
pub mod images;
pub mod llm;
pub mod parser;
pub mod pipeline;
pub mod postprocess;
pub mod prompt;
