pub mod image_encoding;
pub mod month;
