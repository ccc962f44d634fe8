// Output generation module

pub mod csv_table;
pub mod functions_csv;
pub mod summary;
pub mod templates;

pub use csv_table::*;
pub use functions_csv::*;
pub use summary::*;
pub use templates::*;
