//! Installer
//!
//! Orchestrates the install pipeline: resolve the skill document (registry
//! first, bundled local copy second), write it into the skills directory,
//! and persist a fresh claim record.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::claim::{generate_token, write_claim, ClaimRecord};
use crate::config::SKILL_FILE_NAME;
use crate::source::{SkillSource, SourceError};

/// Where the installed skill content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOrigin {
    /// Fetched from the registry.
    Remote,
    /// Read from the bundled local copy.
    Fallback,
}

/// Errors that can occur during installation.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Neither the registry nor the local fallback produced a skill.
    #[error("fetch failed ({fetch_err}); local fallback {} unusable ({fallback_err})", fallback.display())]
    NoSkillAvailable {
        fetch_err: SourceError,
        fallback: PathBuf,
        fallback_err: std::io::Error,
    },
    /// Writing the skill file or claim record failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful install.
#[derive(Debug)]
pub struct InstallOutcome {
    /// Where the skill file was written.
    pub skill_path: PathBuf,
    /// Where the claim record was written.
    pub claim_path: PathBuf,
    /// The freshly generated claim record.
    pub record: ClaimRecord,
    /// Whether the content came from the registry or the bundled copy.
    pub origin: SkillOrigin,
}

/// Orchestrates download, fallback, and on-disk placement of the skill.
pub struct Installer {
    source: Arc<dyn SkillSource>,
    registry_origin: String,
    skills_dir: PathBuf,
    claim_dir: PathBuf,
    fallback_path: PathBuf,
}

impl Installer {
    /// Create a new `Installer`.
    ///
    /// `registry_origin` is used to build the claim URL; `fallback_path`
    /// points at the bundled `SKILL.md` used when the registry is
    /// unreachable.
    pub fn new(
        source: Arc<dyn SkillSource>,
        registry_origin: String,
        skills_dir: PathBuf,
        claim_dir: PathBuf,
        fallback_path: PathBuf,
    ) -> Self {
        Self {
            source,
            registry_origin,
            skills_dir,
            claim_dir,
            fallback_path,
        }
    }

    /// Resolve the skill content, remote first, bundled copy second.
    async fn resolve_skill(&self) -> Result<(String, SkillOrigin), InstallError> {
        match self.source.fetch_skill().await {
            Ok(content) => Ok((content, SkillOrigin::Remote)),
            Err(fetch_err) => {
                warn!(
                    "remote fetch failed ({}), trying {}",
                    fetch_err,
                    self.fallback_path.display()
                );
                match fs::read_to_string(&self.fallback_path) {
                    Ok(content) => Ok((content, SkillOrigin::Fallback)),
                    Err(fallback_err) => Err(InstallError::NoSkillAvailable {
                        fetch_err,
                        fallback: self.fallback_path.clone(),
                        fallback_err,
                    }),
                }
            }
        }
    }

    /// Run the full install.
    ///
    /// Overwrites any previous skill file and claim record. No retries and
    /// no content validation; the skill is opaque text.
    pub async fn install(&self) -> Result<InstallOutcome, InstallError> {
        let (content, origin) = self.resolve_skill().await?;
        debug!("resolved skill content: {} bytes, {:?}", content.len(), origin);

        fs::create_dir_all(&self.skills_dir)?;
        let skill_path = self.skills_dir.join(SKILL_FILE_NAME);
        fs::write(&skill_path, &content)?;
        info!("skill installed at {}", skill_path.display());

        let token = generate_token();
        let url = format!("{}/claim/{}", self.registry_origin, token);
        let record = ClaimRecord { token, url };

        let claim_path = write_claim(&record, &self.claim_dir)?;
        debug!("claim record saved to {}", claim_path.display());

        Ok(InstallOutcome {
            skill_path,
            claim_path,
            record,
            origin,
        })
    }
}
