pub mod patch;
pub mod lead;
pub mod property;
pub mod sale;
pub mod message;
pub mod dashboard;
