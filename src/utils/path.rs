//! Path helpers for user-supplied file arguments.

use std::path::PathBuf;

/// Expand a leading `~/` to the home directory. Other paths are untouched.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// `expand_tilde` as an owned string, for APIs that take `&str`.
pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/x.csv"), PathBuf::from("/tmp/x.csv"));
        assert_eq!(expand_tilde("rel/~/x"), PathBuf::from("rel/~/x"));
    }

    #[test]
    fn tilde_resolves_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/backup.zip"), home.join("backup.zip"));
        }
    }
}
