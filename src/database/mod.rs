pub mod db;
pub mod sample;
pub mod source;

pub use source::{ConjugationFilter, ConjugationSource, MemorySource};
