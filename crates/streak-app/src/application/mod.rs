pub mod commands;
pub mod dtos;
pub mod queries;
