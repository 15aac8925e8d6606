use crate::api;
use crate::auth::{AuthService, UserDirectory};
use crate::cli::actions::Action;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, web_root } => {
            let directory = UserDirectory::with_default_accounts();

            info!("Seeded {} demo accounts", directory.len());

            let auth = Arc::new(AuthService::new(directory));

            api::new(port, web_root, auth).await?;
        }
    }

    Ok(())
}
