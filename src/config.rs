//! AIWD Configuration
//!
//! Path conventions and the optional persisted config at `~/.aiwd/config.json`.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Registry origin used when neither `AIWD_URL` nor the config file sets one.
pub const DEFAULT_ORIGIN: &str = "https://aiwd.app";

/// Path of the skill document on the registry.
pub const REMOTE_SKILL_PATH: &str = "/SKILL.md";

/// File name the skill is installed under.
pub const SKILL_FILE_NAME: &str = "aiwd.md";

/// Directory name under the user's home for all aiwd data.
const AIWD_DIR_NAME: &str = ".aiwd";

/// Config file name within the aiwd directory.
const CONFIG_FILENAME: &str = "config.json";

/// On-disk config representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiwdConfig {
    /// Registry origin override, e.g. `https://aiwd.example`.
    pub registry_url: Option<String>,
    /// ISO-8601 timestamp of when this config was first written.
    pub created_at: String,
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"))
}

/// Returns the aiwd base directory: `~/.aiwd`.
pub fn aiwd_dir() -> PathBuf {
    home_dir().join(AIWD_DIR_NAME)
}

/// Returns the full path to the config file: `~/.aiwd/config.json`.
pub fn config_path() -> PathBuf {
    aiwd_dir().join(CONFIG_FILENAME)
}

/// Skills directory for an install: `~/.claude/skills` when `global`,
/// otherwise `.claude/skills` under the current working directory.
pub fn skills_dir(global: bool) -> Result<PathBuf> {
    let base = if global {
        home_dir()
    } else {
        env::current_dir().context("Failed to resolve current directory")?
    };
    Ok(base.join(".claude").join("skills"))
}

/// Global skills directory scanned by `aiwd list`: `~/.claude/skills`.
pub fn global_skills_dir() -> PathBuf {
    home_dir().join(".claude").join("skills")
}

/// Load the config from disk.
///
/// Returns `None` if the file does not exist or cannot be parsed.
pub fn load_config() -> Option<AiwdConfig> {
    let path = config_path();
    if !path.exists() {
        return None;
    }
    let contents = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save the config to `~/.aiwd/config.json`.
///
/// Creates the aiwd directory with mode 0o700 if it does not exist.
/// The config file is written with mode 0o600.
pub fn save_config(config: &AiwdConfig) -> Result<()> {
    let dir = aiwd_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create aiwd directory")?;
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    let path = config_path();
    fs::write(&path, &json).context("Failed to write config file")?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;

    Ok(())
}

/// Resolve the registry origin: `AIWD_URL` env var, then the config file,
/// then [`DEFAULT_ORIGIN`].
pub fn registry_origin() -> String {
    resolve_origin(env::var("AIWD_URL").ok(), load_config())
}

/// Pure resolution step behind [`registry_origin`]. Blank values are treated
/// as unset, and a trailing slash is trimmed so paths join cleanly.
fn resolve_origin(env_value: Option<String>, config: Option<AiwdConfig>) -> String {
    let origin = env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.and_then(|c| c.registry_url))
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

    origin.trim().trim_end_matches('/').to_string()
}

/// Locate the bundled fallback `SKILL.md`.
///
/// Tries `AIWD_SKILL_PATH`, then `SKILL.md` next to the running executable,
/// then the crate root (dev runs). Returns the first candidate that exists,
/// or the executable-relative path so the caller can report a sensible
/// "no such file" error.
pub fn fallback_skill_path() -> PathBuf {
    if let Ok(p) = env::var("AIWD_SKILL_PATH") {
        if !p.trim().is_empty() {
            return PathBuf::from(p);
        }
    }

    let exe_relative = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("SKILL.md")));

    if let Some(ref p) = exe_relative {
        if p.exists() {
            return p.clone();
        }
    }

    let dev = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("SKILL.md");
    if dev.exists() {
        return dev;
    }

    exe_relative.unwrap_or(dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aiwd_dir_is_under_home() {
        let dir = aiwd_dir();
        assert!(dir.ends_with(".aiwd"));
    }

    #[test]
    fn test_config_path_is_under_aiwd_dir() {
        let path = config_path();
        assert!(path.ends_with("config.json"));
        assert!(path.starts_with(aiwd_dir()));
    }

    #[test]
    fn test_global_skills_dir_is_under_home() {
        let dir = global_skills_dir();
        assert!(dir.ends_with(".claude/skills"));
    }

    #[test]
    fn test_skills_dir_global_matches_list_dir() {
        let dir = skills_dir(true).unwrap();
        assert_eq!(dir, global_skills_dir());
    }

    #[test]
    fn test_skills_dir_local_is_under_cwd() {
        let dir = skills_dir(false).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert!(dir.starts_with(cwd));
        assert!(dir.ends_with(".claude/skills"));
    }

    #[test]
    fn test_resolve_origin_default() {
        assert_eq!(resolve_origin(None, None), DEFAULT_ORIGIN);
    }

    #[test]
    fn test_resolve_origin_env_wins_over_config() {
        let config = AiwdConfig {
            registry_url: Some("https://from-config.test".to_string()),
            created_at: String::new(),
        };
        assert_eq!(
            resolve_origin(Some("https://from-env.test".to_string()), Some(config)),
            "https://from-env.test"
        );
    }

    #[test]
    fn test_resolve_origin_blank_env_falls_through() {
        let config = AiwdConfig {
            registry_url: Some("https://from-config.test".to_string()),
            created_at: String::new(),
        };
        assert_eq!(
            resolve_origin(Some("   ".to_string()), Some(config)),
            "https://from-config.test"
        );
    }

    #[test]
    fn test_resolve_origin_trims_trailing_slash() {
        assert_eq!(
            resolve_origin(Some("https://aiwd.test/".to_string()), None),
            "https://aiwd.test"
        );
    }
}
