use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use libdrive::constants::DRIVE_VERSION;
use libdrive::util::logging;

pub mod cmd;

fn runners() -> HashMap<String, Box<dyn cmd::RunCmd>> {
    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::InitCmd),
        Box::new(cmd::LsCmd),
    ];
    cmds.into_iter()
        .map(|cmd| (cmd.name().to_string(), cmd))
        .collect()
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let runners = runners();
    let mut names: Vec<&String> = runners.keys().collect();
    names.sort();

    let mut command = Command::new("drive")
        .version(DRIVE_VERSION)
        .about("Browse remote cloud storage from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true);
    for name in names {
        command = command.subcommand(runners[name].args());
    }

    let matches = command.get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };
    let Some(runner) = runners.get(name) else {
        eprintln!("Unknown command `drive {name}`");
        return ExitCode::FAILURE;
    };

    match runner.run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
