//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use cinelog_core::AuthStore;
use cinelog_rest::RestAuth;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let api = client.api().clone();
    let auth = RestAuth::new(client);

    // Verify the stored token against the server, not just the local file.
    let user = auth.me().await.map_err(session::handle_api_error)?;

    output::field("Name", &user.name);
    output::field("Email", &user.email);
    output::field("API", api.as_str());

    Ok(())
}
