pub mod cli;
pub mod config;
pub mod discord;
pub mod errlog;
pub mod logging;
pub mod models;
pub mod presence;
pub mod steam;
pub mod update;
