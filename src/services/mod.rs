pub mod animator_service;
pub mod group_service;
pub mod participant_service;
pub mod validation;

pub use animator_service::*;
pub use group_service::*;
pub use participant_service::*;
pub use validation::*;
