//! Display formatting consumed by the summary renderer and report viewers.

pub mod display;

pub use display::{
    format_address, format_hash, format_magnitude, group_thousands, is_abbreviated_column,
    CellDisplay, EMPTY_CELL,
};
