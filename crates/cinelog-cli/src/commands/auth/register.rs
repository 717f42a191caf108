//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use cinelog_core::{ApiUrl, AuthStore, Credentials, SessionStore};
use cinelog_rest::{RestAuth, RestClient};

use crate::output;
use crate::session::storage::{self, StoredSession};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name for the new account
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, default_value = "http://localhost:5000")]
    pub api: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let api = ApiUrl::new(&args.api).context("Invalid API URL")?;
    let client = RestClient::new(api.clone(), SessionStore::new());
    let auth = RestAuth::new(client.clone());

    eprintln!("{}", "Creating account...".dimmed());

    let user = auth
        .register(&args.name, Credentials::new(&args.email, &args.password))
        .await
        .context("Failed to register")?;

    let token = client
        .session()
        .token()
        .context("Registration response carried no token")?;

    storage::save_session(&StoredSession {
        api: api.to_string(),
        user_id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        token: token.as_str().to_string(),
    })
    .context("Failed to save session")?;

    output::success("Account created");
    println!();
    output::field("Name", &user.name);
    output::field("Email", &user.email);
    output::field("API", api.as_str());

    Ok(())
}
