//! Account commands.

use shopcmp_core::SignupRequest;
use shopcmp_session::{Session, SessionState};

pub(crate) async fn run_login(
    session: &mut Session,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let user = session.login(username, password).await?;
    println!("signed in as {}", user.display_name());
    Ok(())
}

pub(crate) async fn run_signup(
    session: &Session,
    email: String,
    username: String,
    password: String,
    full_name: Option<String>,
) -> anyhow::Result<()> {
    let request = SignupRequest {
        email,
        username,
        password,
        full_name,
    };
    let user = session.signup(&request).await?;
    println!(
        "account created for {}; sign in with `shopcmp login {}`",
        user.email, user.username
    );
    Ok(())
}

pub(crate) fn run_logout(session: &mut Session) -> anyhow::Result<()> {
    session.logout()?;
    println!("signed out");
    Ok(())
}

pub(crate) fn run_whoami(session: &Session) {
    match session.state() {
        SessionState::Authenticated(user) => {
            println!("{} <{}> (@{})", user.display_name(), user.email, user.username);
        }
        SessionState::Guest => println!("guest"),
        SessionState::Anonymous => println!("not signed in"),
    }
}
