pub mod cli_args;
mod error;
mod extractor;
mod middleware;
mod repository;
mod route;
pub mod server;
mod state;
