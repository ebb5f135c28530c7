//! Profile table: the typed, ordered view of a Chronos profile CSV.

mod table;

pub use table::{ColumnNames, ProfileRow, ProfileTable};
