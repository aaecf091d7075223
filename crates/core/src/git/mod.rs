//! Git submodule inspection.
//!
//! All interaction with git goes through a [`VcsRunner`]; [`GitCli`] is the
//! subprocess implementation and tests substitute a scripted one.

mod command;
mod inspector;

pub use command::GitCli;
pub use inspector::{GitInspector, SubmoduleRef, parse_commit_info, parse_submodule_status};
