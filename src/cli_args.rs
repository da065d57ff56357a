use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Address the HTTP server binds to.
    #[clap(long, env = "SERVER_ADDRESS", default_value = "127.0.0.1:5000")]
    pub server_address: SocketAddr,

    /// Connection string for the books database.
    #[clap(long, env = "DATABASE_URL", default_value = "sqlite:books.db")]
    pub database_url: String,
}
