//! Embeds git metadata for `advent --version`.
//!
//! The binary reads `VERGEN_GIT_SHA` and `VERGEN_GIT_DIRTY`. When they are not
//! set the version reports the revision as `unknown`.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
