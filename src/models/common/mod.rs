pub mod datetime;
pub mod response;
