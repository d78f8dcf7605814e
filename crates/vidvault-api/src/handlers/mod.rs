pub mod fetch;
pub mod upload;
