//! Mission Hub - Volunteer mission management service
//!
//! Missions users can apply to, with an administrative approval workflow:
//! applications start `Pending`, an administrator approves them, and either
//! state can be deleted. Users also declare skills.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
