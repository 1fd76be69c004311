//! health-gateway: forwards health questions to Gemini and emails chat
//! transcripts.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
