pub mod inventory;
pub mod technician;
pub mod ticket;
