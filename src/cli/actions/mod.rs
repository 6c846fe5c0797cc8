pub mod check_password;
pub mod login;
pub mod profile;
pub mod results;

mod connect;
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Profile(profile::Args),
    Results(results::Args),
    CheckPassword(check_password::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
