pub mod flat_record;
pub mod history_record;
