pub mod backup;
pub mod edit;
pub mod store;
pub mod tracker;
