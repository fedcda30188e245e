pub mod baseline;
pub mod daily;
