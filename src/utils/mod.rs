pub mod date;
pub mod formatting;

pub use formatting::hours2readable;
