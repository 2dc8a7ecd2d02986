pub mod sheet;

pub use sheet::{RawSheet, read_sheet};
