//! # drive ls
//!
//! Recursively list remote folders
//!

use std::io::Write;

use crate::api::RemoteStore;
use crate::core::{PagePrompt, PathResolver, TreeWalker, Walk};
use crate::error::DriveError;
use crate::model::{Entry, RemotePath};
use crate::opts::ListOpts;

/// How listing one root went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootOutcome {
    Walked(Walk),
    /// A page fetch failed part way, rows printed before it stay printed
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootListing {
    pub path: RemotePath,
    pub outcome: RootOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub roots: Vec<RootListing>,
}

impl ListSummary {
    /// True when no root was cut short by a failed fetch
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&RemotePath, &str)> {
        self.roots.iter().filter_map(|root| match &root.outcome {
            RootOutcome::Failed(message) => Some((&root.path, message.as_str())),
            RootOutcome::Walked(_) => None,
        })
    }
}

/// # List remote folders
///
/// Every source is resolved and looked up before anything is walked. A path
/// that cannot be resolved fails right away. A path the remote does not know
/// gets a `<error>: '<path>'` line on `out` and aborts the listing.
///
/// Each root is then walked as `/<root name>`. A fetch error while walking is
/// recorded in the summary and the next root is still listed.
pub async fn list(
    resolver: &PathResolver,
    remote: &dyn RemoteStore,
    opts: &ListOpts,
    prompt: &mut dyn PagePrompt,
    out: &mut (dyn Write + Send),
) -> Result<ListSummary, DriveError> {
    let mut roots: Vec<(RemotePath, Entry)> = vec![];
    for source in opts.sources_or_cwd() {
        let path = resolver.resolve(&source)?;
        match remote.find_by_path(&path).await {
            Ok(entry) => roots.push((path, entry)),
            Err(err) => {
                writeln!(out, "{err}: '{path}'")?;
                return Err(DriveError::list_aborted(path));
            }
        }
    }

    let mut summary = ListSummary::default();
    let mut walker = TreeWalker::new(remote, prompt, out, opts);
    for (path, entry) in roots {
        let root_name = format!("/{}", entry.name);
        let outcome = match walker.walk(&entry.id, &root_name, opts.depth).await {
            Ok(walk) => RootOutcome::Walked(walk),
            Err(err) => {
                log::warn!("listing {} stopped early: {}", path, err);
                RootOutcome::Failed(err.to_string())
            }
        };
        summary.roots.push(RootListing { path, outcome });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::command::{self, RootOutcome};
    use crate::core::{AlwaysContinue, PathResolver, Walk};
    use crate::error::DriveError;
    use crate::opts::ListOpts;
    use crate::test::{self, FakeRemote};

    fn resolver() -> PathResolver {
        PathResolver::new("/home/me/drive")
    }

    #[tokio::test]
    async fn test_lookup_failure_aborts_before_walking() -> Result<(), DriveError> {
        let mut remote = FakeRemote::new();
        remote.add_dir("root", "docs", "docs");
        remote.add_file("docs", "r", "report.pdf", 2048);

        let opts = ListOpts::from_sources(vec!["docs".into(), "missing".into()]);
        let mut out: Vec<u8> = vec![];
        let result =
            command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await;

        assert!(matches!(result, Err(DriveError::ListAborted(_))));
        assert!(remote.list_requests().is_empty());
        let output = String::from_utf8_lossy(&out).to_string();
        assert_eq!(output, "remote path doesn't exist: '/missing'\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_resolution_failure_is_returned() -> Result<(), DriveError> {
        let remote = FakeRemote::new();
        let opts = ListOpts::from_sources(vec![PathBuf::from("/etc/passwd")]);
        let mut out: Vec<u8> = vec![];
        let result =
            command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await;

        assert!(matches!(result, Err(DriveError::PathResolution(_))));
        assert!(out.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_docs_folder() -> Result<(), DriveError> {
        let mut remote = FakeRemote::new();
        remote.add_dir("root", "docs", "docs");
        let mut report = test::file_entry("r", "report.pdf", 2048);
        report.shared = true;
        remote.add_entry("docs", report);
        remote.add_dir("docs", "archive", "archive");

        let opts = ListOpts::from_sources(vec!["/home/me/drive/docs".into()]);
        let mut out: Vec<u8> = vec![];
        let summary =
            command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await?;

        let output = String::from_utf8_lossy(&out).to_string();
        assert_eq!(
            output,
            "-s 2KB        /docs/report.pdf 2015-03-04 10:11:12 UTC\n\
             d- 0B         /docs/archive 2015-03-04 10:11:12 UTC\n"
        );
        assert!(summary.is_complete());
        assert_eq!(summary.roots.len(), 1);
        assert_eq!(summary.roots[0].path.as_str(), "/docs");
        assert_eq!(summary.roots[0].outcome, RootOutcome::Walked(Walk::Completed));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_sources_lists_the_context_root() -> Result<(), DriveError> {
        let mut remote = FakeRemote::new();
        remote.add_file("root", "a", "a.txt", 1);

        let opts = ListOpts::default().with_human(false);
        let mut out: Vec<u8> = vec![];
        command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await?;

        let output = String::from_utf8_lossy(&out).to_string();
        assert_eq!(
            output,
            "-- 1          /My Drive/a.txt 2015-03-04 10:11:12 UTC\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_error_on_one_root_keeps_going() -> Result<(), DriveError> {
        let mut remote = FakeRemote::new();
        remote.add_dir("root", "bad", "bad");
        remote.add_dir("root", "good", "good");
        remote.add_file("good", "g", "g.txt", 5);
        remote.fail_listing("bad");

        let opts = ListOpts::from_sources(vec!["bad".into(), "good".into()]);
        let mut out: Vec<u8> = vec![];
        let summary =
            command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await?;

        assert!(!summary.is_complete());
        let failures: Vec<&str> = summary.failures().map(|(p, _)| p.as_str()).collect();
        assert_eq!(failures, vec!["/bad"]);
        assert_eq!(summary.roots[1].outcome, RootOutcome::Walked(Walk::Completed));

        let output = String::from_utf8_lossy(&out).to_string();
        assert!(output.contains("/good/g.txt"));
        Ok(())
    }

    #[tokio::test]
    async fn test_depth_zero_walks_nothing() -> Result<(), DriveError> {
        let mut remote = FakeRemote::new();
        remote.add_file("root", "a", "a.txt", 1);

        let opts = ListOpts::default().with_depth(0);
        let mut out: Vec<u8> = vec![];
        let summary =
            command::list(&resolver(), &remote, &opts, &mut AlwaysContinue, &mut out).await?;

        assert!(out.is_empty());
        assert!(summary.is_complete());
        assert_eq!(
            summary.roots[0].outcome,
            RootOutcome::Walked(Walk::DepthExhausted)
        );
        Ok(())
    }
}
