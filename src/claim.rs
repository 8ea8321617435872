//! Claim Tokens
//!
//! A claim token links a local install to a remote aiwd account. The token
//! is generated locally (16 random bytes, hex-encoded) and persisted next to
//! the claim URL so `aiwd claim` can print it later.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use rand::RngCore;

use crate::config::aiwd_dir;

/// Claim token file name within the aiwd directory.
const CLAIM_FILENAME: &str = "claim-token.txt";

/// A persisted claim record: the token and the URL to claim it at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    pub token: String,
    pub url: String,
}

/// Returns the default claim token path: `~/.aiwd/claim-token.txt`.
pub fn claim_file_path() -> PathBuf {
    aiwd_dir().join(CLAIM_FILENAME)
}

/// Generate a new claim token: 16 random bytes as lowercase hex.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Write the claim record under `dir`, two lines: token then URL.
///
/// The directory is created with mode 0o700 and the file 0o600; the token
/// is the only proof of ownership until the install is claimed.
pub fn write_claim(record: &ClaimRecord, dir: &Path) -> io::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }

    let path = dir.join(CLAIM_FILENAME);
    let contents = format!("{}\n{}\n", record.token, record.url);
    fs::write(&path, contents)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;

    Ok(path)
}

/// Read a claim record from `dir`.
///
/// Returns `None` when the file is missing or does not hold the expected
/// two lines. A missing token is "nothing to show", not an error.
pub fn read_claim(dir: &Path) -> Option<ClaimRecord> {
    let path = dir.join(CLAIM_FILENAME);
    let contents = fs::read_to_string(path).ok()?;

    let mut lines = contents.trim().lines();
    let token = lines.next()?.trim().to_string();
    let url = lines.next()?.trim().to_string();

    if token.is_empty() || url.is_empty() {
        return None;
    }

    Some(ClaimRecord { token, url })
}
