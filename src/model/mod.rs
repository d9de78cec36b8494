pub mod panel;
pub mod regression;
