pub mod batch;
pub mod projection;
pub mod store;
