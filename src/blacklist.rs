//! Blacklist management module
//!
//! Holds the set of common passwords the evaluator penalises. The built-in
//! entries are always present; extra entries can be loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

/// Passwords that are always treated as common.
pub const COMMON_PASSWORDS: [&str; 6] = ["password", "123456", "qwerty", "admin", "welcome", "letmein"];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the extra blacklist file path from `PWD_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}

/// Case-insensitive set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    /// The built-in [`COMMON_PASSWORDS`] only.
    pub fn builtin() -> Self {
        Self {
            entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in entries plus the file named by `PWD_BLACKLIST_PATH`.
    ///
    /// Falls back to [`Blacklist::builtin`] when the variable is not set.
    ///
    /// # Errors
    ///
    /// Same as [`Blacklist::from_path`] when the variable is set.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match get_blacklist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Built-in entries plus one password per line of `path`.
    ///
    /// Lines are trimmed and lowercased; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let mut blacklist = Self::builtin();
        blacklist.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Adds entries, normalised the same way as file lines.
    pub fn extend<'a, I>(&mut self, passwords: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.entries.extend(
            passwords
                .into_iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        );
    }

    /// Returns `true` if `password` is in the blacklist (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env tests are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env tests are #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_contains_common_passwords() {
        let blacklist = Blacklist::builtin();
        for pwd in COMMON_PASSWORDS {
            assert!(blacklist.contains(pwd), "{} should be blacklisted", pwd);
        }
        assert_eq!(blacklist.len(), COMMON_PASSWORDS.len());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let blacklist = Blacklist::builtin();
        assert!(blacklist.contains("PassWord"));
        assert!(blacklist.contains("LETMEIN"));
        assert!(!blacklist.contains("password1"));
        assert!(!blacklist.contains(" password"));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_unset() {
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(get_blacklist_path(), None);
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(get_blacklist_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_without_variable_is_builtin() {
        remove_env(BLACKLIST_PATH_ENV);
        let blacklist = Blacklist::from_env().expect("builtin never fails");
        assert_eq!(blacklist, Blacklist::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = Blacklist::from_env();
        match result {
            Err(BlacklistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_merges_file_entries() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Dragon").expect("Failed to write");
        writeln!(temp_file, "  monkey  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(BLACKLIST_PATH_ENV, path);

        let blacklist = Blacklist::from_env().expect("file is valid");
        assert!(blacklist.contains("dragon"));
        assert!(blacklist.contains("MONKEY"));
        assert!(blacklist.contains("qwerty"));
        assert_eq!(blacklist.len(), COMMON_PASSWORDS.len() + 2);

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n").expect("Failed to write empty content");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_duplicates_builtin() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "QWERTY").expect("Failed to write");

        let blacklist = Blacklist::from_path(temp_file.path()).expect("file is valid");
        assert_eq!(blacklist.len(), COMMON_PASSWORDS.len());
    }
}
