//! UI widgets

pub mod meter;

pub use meter::meter;
