//! Output sinks. Both consume the same catalog and derive their columns
//! from the same canonical header list, so the table and the CSV can never
//! disagree on shape.

pub mod csv;
pub mod table;
