pub mod leads;
pub mod properties;
pub mod sales;
pub mod messages;
pub mod dashboard;
