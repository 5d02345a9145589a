pub mod entry;
pub mod status;
