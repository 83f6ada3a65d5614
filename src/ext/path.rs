use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extension trait for `Path` used by the template pipeline.
pub trait PathExt {
    /// Converts a path to a string slice, failing when it is not valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use liftoff::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("terraform/main.tf.j2");
    /// assert_eq!(path.to_str_checked().unwrap(), "terraform/main.tf.j2");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the path with `suffix` removed from its file name, or `None`
    /// when the file name does not end with it.
    ///
    /// # Examples
    /// ```
    /// use liftoff::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("out/terraform.tf.j2");
    /// assert_eq!(path.strip_file_suffix(".j2"), Some(PathBuf::from("out/terraform.tf")));
    /// assert_eq!(path.strip_file_suffix(".tmpl"), None);
    /// ```
    fn strip_file_suffix(&self, suffix: &str) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            )
            .into()
        })
    }

    fn strip_file_suffix(&self, suffix: &str) -> Option<PathBuf> {
        let file_name = self.file_name()?.to_str()?;
        let stem = file_name.strip_suffix(suffix).filter(|stem| !stem.is_empty())?;
        Some(self.with_file_name(stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_str_checked_valid() {
        let path = Path::new("valid_path");
        assert_eq!(path.to_str_checked().unwrap(), "valid_path");
    }

    #[test]
    fn test_strip_file_suffix_nested() {
        let path = Path::new("a/b/variables.tf.j2");
        assert_eq!(path.strip_file_suffix(".j2"), Some(PathBuf::from("a/b/variables.tf")));
    }

    #[test]
    fn test_strip_file_suffix_bare_suffix_is_not_a_template() {
        assert_eq!(Path::new("dir/.j2").strip_file_suffix(".j2"), None);
    }
}
