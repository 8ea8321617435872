//! Installed Skills
//!
//! Discovers `.md` skill files in the skills directory for `aiwd list`.

use std::fs;
use std::path::Path;

/// Scan `dir` for `.md` files and return their names without the extension,
/// sorted. A missing or unreadable directory yields an empty list.
pub fn list_skills(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let skills = list_skills(&dir.path().join("nope"));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_empty_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_skills(dir.path()).is_empty());
    }

    #[test]
    fn test_lists_only_md_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeta.md"), "").unwrap();
        fs::write(dir.path().join("aiwd.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("subdir.md")).unwrap();

        let skills = list_skills(dir.path());
        assert_eq!(skills, vec!["aiwd".to_string(), "zeta".to_string()]);
    }
}
