// Readers for the gentables inputs

pub mod protos;
pub mod records;
pub mod tags;

pub use protos::{Prototype, PrototypeParser};
pub use records::{read_programs, read_sources, read_table, ProgramRecord, RawTable, SourceRecord};
pub use tags::{read_function_tags, TagEntry};
