//! Output for `signup`, `login` and `whoami`

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header, user_json, user_record};
use crate::output_by_format_result;
use galaxy_core::error::Result;
use galaxy_core::user::User;

pub fn output_user(cli: &Cli, user: &User, mode: &str) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&user_json(user)),
        human => {
            match mode {
                "signup" => println!("Signed up as {} <{}> ({})", user.name, user.email, user.id),
                "login" => println!("Logged in as {} <{}>", user.name, user.email),
                _ => println!("{} <{}> ({})", user.name, user.email, user.id),
            }
        },
        records => {
            print_records_header(mode, &[]);
            println!("{}", user_record(user));
        }
    )
}
