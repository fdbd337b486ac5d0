pub mod store;
pub use store::EntityStore;
pub mod repository;
pub use repository::{LeadRepository, MessageRepository, PropertyRepository, SaleRepository, SalesSnapshot};
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
