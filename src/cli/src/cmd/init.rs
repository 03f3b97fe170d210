use std::path::PathBuf;

use async_trait::async_trait;
use clap::{arg, Arg, Command};

use libdrive::command;
use libdrive::config::DriveConfig;
use libdrive::error::DriveError;

use crate::cmd::RunCmd;

pub const INIT: &str = "init";

pub struct InitCmd;

#[async_trait]
impl RunCmd for InitCmd {
    fn name(&self) -> &str {
        INIT
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(INIT)
            .about("Marks a local directory as the root of the remote drive")
            .arg(arg!([PATH] "The directory to map onto the remote root. Defaults to the current directory."))
            .arg(
                Arg::new("remote")
                    .long("remote")
                    .short('r')
                    .help("URL of the remote files API")
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("auth")
                    .long("auth")
                    .short('a')
                    .help("Bearer token sent with every request")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("page-size")
                    .long("page-size")
                    .help("Default page size for `drive ls`")
                    .value_parser(clap::value_parser!(usize))
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), DriveError> {
        // Parse Args
        let default = String::from(".");
        let path = args.get_one::<String>("PATH").unwrap_or(&default);
        let Some(remote) = args.get_one::<String>("remote") else {
            return Err(DriveError::remote_not_set());
        };

        let mut config = DriveConfig::with_remote(remote);
        config.auth_token = args.get_one::<String>("auth").cloned();
        config.page_size = args.get_one::<usize>("page-size").copied();

        let context = command::init(&PathBuf::from(path), config)?;
        println!("drive context initialized at: {:?}", context.path);
        Ok(())
    }
}
