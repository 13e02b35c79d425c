pub mod global_error;
pub mod inventory;
pub mod metrics;
pub mod technician;
pub mod ticket;
