pub mod chart;
pub mod forms;
