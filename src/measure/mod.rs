pub mod constants;
pub mod formatter;
pub mod number;

pub use constants::MeasurementSystem;
pub use formatter::formatted_amount;
pub use number::{format_number, format_quarter_fraction, round_to_nearest, sortable_value};
