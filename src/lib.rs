//! # sheetsort
//!
//! An in-memory sheet model with typed, column-driven row sorting.
//!
//! This crate provides:
//! - [`Workbook`] and [`Worksheet`] - a minimal grid of rows and cells
//! - [`CellAddress`] - A1-notation addressing and column letters
//! - [`SortStrategy`] - sort configuration plus the row-comparison oracle
//!   and the range strings a sort-condition writer needs
//!
//! ## Example
//!
//! ```rust
//! use sheetsort::{CellValueType, SortDirection, SortStrategy, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! for name in ["pliers", "Anvil", "crowbar"] {
//!     sheet.add_row().add_cell().set_value(name);
//! }
//!
//! let strategy = SortStrategy::new(0, CellValueType::Text, SortDirection::Ascending);
//! sheet.sort_by_column(&strategy);
//!
//! assert_eq!(sheet.row(0).unwrap().cell(0).unwrap().value(), "Anvil");
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod row;
pub mod sort;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use address::CellAddress;
pub use cell::Cell;
pub use error::{Error, Result};
pub use row::Row;
pub use sort::{CellValueType, SortDirection, SortStrategy};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
