pub mod agenda;
pub mod api;
pub mod attendees;
pub mod cli;
pub mod core;
pub mod identity;
pub mod links;
pub mod meetings;
pub mod schedule;
