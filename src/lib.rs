//! AIWD Skill Installer
//!
//! Fetches the AIWD skill document from the registry (falling back to a
//! bundled local copy), installs it into an agent skills directory, and
//! manages the claim token that links an install to a remote account.

pub mod claim;
pub mod config;
pub mod install;
pub mod output;
pub mod skills;
pub mod source;
