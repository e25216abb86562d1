use color_eyre::eyre::{Result, bail};
use lexis_auth::{
    AuthClientExt,
    login::{Credentials, LoginAction, LoginStore},
};
use lexis_cli::{password_prompt_when_none, text_prompt_when_none};
use lexis_core::Client;
use lexis_state::Dispatch;
use tracing::debug;

use super::LoginArgs;
use crate::render::RenderConfig;

fn resolve_password(args: &LoginArgs) -> Result<Option<String>> {
    if let Some(var) = &args.passwordenv {
        return match std::env::var(var) {
            Ok(password) => Ok(Some(password)),
            Err(_) => bail!("Environment variable {var} is not set"),
        };
    }
    Ok(args.password.clone())
}

pub(crate) async fn login_password(
    client: Client,
    args: LoginArgs,
    render: &RenderConfig,
) -> Result<()> {
    let password = resolve_password(&args)?;
    let username = text_prompt_when_none("Username", args.username)?;
    let password = password_prompt_when_none("Password", password)?;

    let store = LoginStore::default();
    let dispatch = |action: LoginAction| {
        render.render(&action);
        store.dispatch(action);
    };

    client
        .auth()
        .login()
        .login_with(Credentials::new(username, password), &dispatch)
        .await;

    let state = store.state();
    debug!(authenticated = state.is_authenticated(), "Login flow finished");

    match (state.user, state.error) {
        (Some(_), _) => Ok(()),
        (None, Some(error)) => bail!("Login failed: {}", error.message()),
        (None, None) => bail!("Login finished without an outcome"),
    }
}
