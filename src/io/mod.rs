//! I/O module
//!
//! Handles console input and stock output.
//!
//! # Components
//!
//! - `command_reader` - Line reader yielding parsed console commands
//! - `report` - Stock report rendering (plain text or CSV)

pub mod command_reader;
pub mod report;

pub use command_reader::{Command, CommandReader};
pub use report::{write_stock_report, StockRow};
