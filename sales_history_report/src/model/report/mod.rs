pub mod report_settings;
