pub mod configs;
pub mod history;
pub mod report;
