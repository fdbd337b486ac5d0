pub mod lead_service;
pub mod property_service;
pub mod sale_service;
pub mod message_service;
pub mod dashboard_service;
