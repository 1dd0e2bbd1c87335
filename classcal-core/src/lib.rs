//! Core types for classcal.
//!
//! This crate provides everything the terminal front end needs to show a
//! school calendar:
//! - `event` for school events and the filters applied to them
//! - `grid` and `month` for building Sunday-first month grids and paging
//!   between months
//! - `store` and `ics` for the directory of `.ics` files events live in
//! - `config` for the global configuration file

pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod month;
pub mod store;
mod utils;

pub use date_range::DateRange;
pub use error::{CalError, CalResult};
pub use event::{CalendarEvent, EventCategory, EventFilter};
pub use grid::{CalendarCell, MonthGrid, build_month_grid};
pub use month::shift_month;
