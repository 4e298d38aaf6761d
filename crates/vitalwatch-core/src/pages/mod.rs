mod constants;
mod layout;

pub mod dashboard;
pub mod incoming;
pub mod menu;
pub mod page;
pub mod page_manager;
pub mod vitals;

pub use dashboard::DashboardPage;
pub use incoming::IncomingEmergencyPage;
pub use menu::MenuPage;
pub use page::{Page, PageWrapper};
pub use page_manager::PageManager;
pub use vitals::VitalsPage;
