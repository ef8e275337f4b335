pub mod appointments;
pub mod booking;
pub mod credentials;
pub mod messaging;
pub mod phone;
