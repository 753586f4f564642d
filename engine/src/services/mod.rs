// Engine services module
pub mod dvol_service;

pub use dvol_service::DvolService;
