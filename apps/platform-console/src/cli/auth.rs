//! Session commands

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use crate::application::ports::AuthPort;
use crate::domain::session::Session;
use crate::infrastructure::config::Container;

/// Arguments for `login`
#[derive(Args)]
pub struct LoginArgs {
    /// Account name
    #[arg(long, short)]
    pub username: String,

    /// Password; prompted on stdin when omitted
    #[arg(long, env = "PLATFORM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Log in and persist the returned token.
pub async fn login(args: LoginArgs, container: &Container) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };
    if password.is_empty() {
        bail!("password is required");
    }

    let response = container
        .backend()
        .login(&args.username, &password)
        .await
        .context("login failed")?;
    let session = Session::from(response);
    container.session_store().save(&session)?;

    info!(user = %args.username, "session stored");
    println!("Logged in as {}", session.username().unwrap_or(&args.username));
    Ok(())
}

/// Forget the stored session.
pub fn logout(container: &Container) -> Result<()> {
    container.session_store().clear()?;
    println!("Logged out");
    Ok(())
}

/// Print who the stored session belongs to.
pub fn whoami(container: &Container) -> Result<()> {
    let session = container.session();
    println!("{}", describe(session));
    Ok(())
}

fn describe(session: &Session) -> String {
    match (session.is_admin(), session.username()) {
        (true, Some(user)) => {
            let role = session
                .user
                .as_ref()
                .and_then(|u| u.role.as_deref())
                .unwrap_or("admin");
            format!("{user} ({role})")
        }
        (true, None) => "logged in".to_string(),
        (false, _) => "not logged in".to_string(),
    }
}

fn prompt_password() -> Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Password: ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::User;

    #[test]
    fn describes_session() {
        assert_eq!(describe(&Session::anonymous()), "not logged in");

        let session = Session {
            access_token: Some("abc".to_string()),
            user: Some(User {
                username: "kim".to_string(),
                role: None,
            }),
        };
        assert_eq!(describe(&session), "kim (admin)");

        let token_only = Session {
            access_token: Some("abc".to_string()),
            user: None,
        };
        assert_eq!(describe(&token_only), "logged in");
    }
}
