// GUI components module
pub mod chart;
pub mod gauge;
pub mod toolbar;
