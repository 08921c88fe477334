use thiserror::Error;

pub mod commands;
pub mod config;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load config")]
    LoadConfig,
    #[error("invalid input")]
    InvalidInput,
    #[error("connection failed")]
    Connection,
    #[error("contract query failed")]
    Query,
}
