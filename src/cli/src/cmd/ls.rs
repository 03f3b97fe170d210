use std::path::PathBuf;

use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;

use libdrive::command;
use libdrive::constants::DEFAULT_DEPTH;
use libdrive::core::{AlwaysContinue, LinePrompt, PagePrompt, PathResolver};
use libdrive::error::DriveError;
use libdrive::model::LocalContext;
use libdrive::opts::ListOpts;

use crate::cmd::RunCmd;
pub const NAME: &str = "ls";
pub struct LsCmd;

#[async_trait]
impl RunCmd for LsCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Recursively list remote files and folders")
            .arg(
                Arg::new("paths")
                    .help("Paths to list, relative to the current directory. Defaults to the current directory.")
                    .num_args(0..)
                    .action(clap::ArgAction::Append),
            )
            .arg(
                Arg::new("depth")
                    .long("depth")
                    .short('d')
                    .help("How many levels to descend, negative for no limit")
                    .default_value("-1")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i32))
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("page-size")
                    .long("page-size")
                    .help("Entries fetched per request. Defaults to the context config, then 30.")
                    .value_parser(clap::value_parser!(usize))
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("bytes")
                    .long("bytes")
                    .help("Print sizes as raw byte counts")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(
                Arg::new("no-prompt")
                    .long("no-prompt")
                    .help("Fetch every page without asking")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), DriveError> {
        let sources: Vec<PathBuf> = args
            .get_many::<String>("paths")
            .unwrap_or_default()
            .map(PathBuf::from)
            .collect();
        let depth = args
            .get_one::<i32>("depth")
            .copied()
            .unwrap_or(DEFAULT_DEPTH);

        let context = LocalContext::from_current_dir()?;
        let remote = context.remote()?;
        let page_size = args
            .get_one::<usize>("page-size")
            .copied()
            .unwrap_or_else(|| context.config.page_size());

        let opts = ListOpts::from_sources(sources)
            .with_depth(depth)
            .with_page_size(page_size)
            .with_human(!args.get_flag("bytes"));

        log::debug!(
            "drive ls {:?} depth {} page size {}",
            opts.sources,
            opts.depth,
            opts.page_size
        );

        let cwd = dunce::canonicalize(std::env::current_dir()?)?;
        let resolver = PathResolver::new(&context.path).with_cwd(cwd);

        let mut prompt: Box<dyn PagePrompt> = if args.get_flag("no-prompt") {
            Box::new(AlwaysContinue)
        } else {
            Box::new(LinePrompt::stdin())
        };
        let mut out = std::io::stdout();

        let summary =
            command::list(&resolver, &remote, &opts, prompt.as_mut(), &mut out).await?;
        for (path, err) in summary.failures() {
            let warning = format!("Listing of {path} is incomplete: {err}");
            eprintln!("{}", warning.yellow());
        }
        Ok(())
    }
}
