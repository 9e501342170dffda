pub mod client;
pub mod scratch;
