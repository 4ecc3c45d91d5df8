pub mod completion;
pub mod document;
