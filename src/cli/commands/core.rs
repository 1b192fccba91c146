//! Argument structures for the top-level commands

use clap::Args;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Email address (unique per store)
    pub email: String,

    /// Display name
    #[arg(long, short)]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address used at signup
    pub email: String,
}

#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Id of one of your ideas
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// User id (defaults to the active user)
    pub user_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Text to analyse; multiple words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}
