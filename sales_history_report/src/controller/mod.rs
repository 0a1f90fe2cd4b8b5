pub mod main_controller;
pub mod report_controller;
