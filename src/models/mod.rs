pub mod appointment;
pub mod booking;
pub mod credentials;

pub use appointment::{Appointment, AppointmentStatus, ConsultationType};
pub use booking::{BookingForm, BookingOutcome, Delivery};
pub use credentials::Credentials;
