use async_trait::async_trait;
use clap::{Arg, Command};

use libdrive::command::config;
use libdrive::error::DriveError;
use libdrive::model::LocalContext;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Sets the configuration in .drive/config.toml")
            .arg(
                Arg::new("remote")
                    .long("remote")
                    .short('r')
                    .value_name("URL")
                    .help("Set the URL of the remote files API.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("auth")
                    .long("auth")
                    .short('a')
                    .value_name("TOKEN")
                    .help("Set the bearer token, an empty value clears it.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("page-size")
                    .long("page-size")
                    .help("Set the default page size for `drive ls`, 0 resets it.")
                    .value_parser(clap::value_parser!(usize))
                    .action(clap::ArgAction::Set),
            )
            .arg_required_else_help(true)
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), DriveError> {
        let mut context = LocalContext::from_current_dir()?;

        if let Some(url) = args.get_one::<String>("remote") {
            let remote = config::set_remote(&mut context, url)?;
            println!("remote set to {}", remote.url());
        }

        if let Some(token) = args.get_one::<String>("auth") {
            config::set_auth_token(&mut context, Some(token))?;
        }

        if let Some(page_size) = args.get_one::<usize>("page-size") {
            let page_size = config::set_page_size(&mut context, *page_size)?;
            println!("page size set to {page_size}");
        }

        Ok(())
    }
}
