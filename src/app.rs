//! Startup gating.
//!
//! Decides what the process does before any network activity: show the wiki,
//! reject the invocation as a usage error, or run the lookup pipeline. The
//! binary maps these to exit codes (wiki → 0, usage error → 1).

use crate::config::Opt;

/// What the process should do before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupAction {
    /// Print the wiki page and exit 0.
    ShowWiki,
    /// Print a usage error and exit 1.
    UsageError,
    /// Run the lookup pipeline.
    Run,
}

/// Gates the parsed options into a [`StartupAction`].
///
/// The wiki flag wins over everything else, including a missing domain, so
/// `--wiki` never triggers a usage error or a network call. Without it, a
/// missing domain is a usage error; otherwise the pipeline runs.
pub fn startup_action(opt: &Opt) -> StartupAction {
    if opt.wiki {
        StartupAction::ShowWiki
    } else if opt.domain.is_none() {
        StartupAction::UsageError
    } else {
        StartupAction::Run
    }
}
