pub mod bookings;
pub mod commands;
pub mod context;
pub mod events;
pub mod stations;
