pub mod client;
pub mod envelope;
pub mod resource;
