//! Application layer - Use cases, ports and DTOs

pub mod dto;
pub mod ports;
pub mod services;
