//! Auth subcommand implementations.

mod login;
mod logout;
mod register;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and store a session
    Login(login::LoginArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// Remove the stored session
    Logout(logout::LogoutArgs),

    /// Display the logged-in account
    Whoami(whoami::WhoamiArgs),
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args).await,
        AuthSubcommand::Register(args) => register::run(args).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
        AuthSubcommand::Whoami(args) => whoami::run(args).await,
    }
}
