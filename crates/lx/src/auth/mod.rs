use clap::Args;
use lexis_core::ClientSettings;

use crate::render::RenderConfig;

mod login;

#[derive(Args, Clone)]
pub struct LoginArgs {
    #[arg(help = "Username, prompted for when omitted")]
    pub username: Option<String>,

    #[arg(long, help = "Password, prompted for when omitted")]
    pub password: Option<String>,

    #[arg(
        long,
        conflicts_with = "password",
        help = "Environment variable storing your password."
    )]
    pub passwordenv: Option<String>,
}

impl LoginArgs {
    pub async fn run(
        self,
        settings: ClientSettings,
        render: &RenderConfig,
    ) -> color_eyre::eyre::Result<()> {
        let client = lexis_core::Client::new(Some(settings));
        login::login_password(client, self, render).await
    }
}
