//! Municipality list adapters.

mod builtin;
mod json_file;

pub use builtin::BuiltinMunicipalitySource;
pub use json_file::JsonFileMunicipalitySource;
