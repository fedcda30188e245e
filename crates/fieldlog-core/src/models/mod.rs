pub mod answer;
pub mod entry;
pub mod participant;
pub mod profile;
