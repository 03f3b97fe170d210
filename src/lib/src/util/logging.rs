//! Logger setup shared by the CLI and the tests
//!

use env_logger::Env;
use std::io::Write;

/// Installs the env_logger, `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let env = Env::default().default_filter_or("warn");
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let file_name = record
                .file()
                .and_then(|f| f.rsplit('/').next())
                .unwrap_or("unknown");

            writeln!(
                buf,
                "[{}] {} - {}/{}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                short_target(record.target()),
                file_name,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::trace!("logger was already installed");
    }
}

/// "libdrive::core::walker" => "core"
fn short_target(target: &str) -> String {
    let target = target.strip_prefix("libdrive::").unwrap_or(target);
    match target.rsplit_once("::") {
        Some((module, _)) => module.replace("::", "/"),
        None => target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::short_target;

    #[test]
    fn test_short_target_strips_crate_and_leaf() {
        assert_eq!(short_target("libdrive::core::walker"), "core");
        assert_eq!(short_target("libdrive::api::client::files"), "api/client");
        assert_eq!(short_target("drive"), "drive");
    }
}
