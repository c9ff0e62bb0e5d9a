use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
///
/// Falls back to the path as given when expansion fails.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_unchanged() {
        assert_eq!(expand_path(Path::new("a/b.txt")), PathBuf::from("a/b.txt"));
    }

    #[test]
    fn test_unknown_variable_keeps_path() {
        let path = Path::new("$TREEVIS_SURELY_UNSET_VAR/x");
        assert_eq!(expand_path(path), path.to_path_buf());
    }
}
