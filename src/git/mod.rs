mod changeset;
mod runner;

pub use changeset::{Baseline, ChangeSetResolver};
pub use runner::{GitCli, GitOutput, GitRunner};
