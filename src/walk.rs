//! Icon discovery.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use ignore::{DirEntry, WalkBuilder};
use regex::Regex;

use crate::error::IconError;

static SVG_FILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.svg$").unwrap());

/// One SVG asset found under the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    /// Path relative to the input root, `/`-separated, without the `.svg`
    /// extension.
    pub relative: String,
    pub path: PathBuf,
}

impl IconFile {
    /// Read the markup. Invalid UTF-8 is replaced with U+FFFD rather than
    /// rejected.
    pub fn read(&self) -> Result<String, IconError> {
        let bytes = fs::read(&self.path).map_err(|source| IconError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Recursively walk `indir`, yielding every `.svg` file in file name order.
///
/// The walk is lazy, so each icon can be handled before the next one is
/// found. Hidden files and ignore files are not special: everything under
/// `indir` is visited.
pub fn discover(
    indir: &Path,
) -> Result<impl Iterator<Item = Result<IconFile, IconError>>, IconError> {
    if !indir.is_dir() {
        return Err(IconError::MissingInput(indir.to_path_buf()));
    }

    let root = indir.to_path_buf();
    let walker = WalkBuilder::new(indir)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    Ok(walker.filter_map(move |entry| icon_file(&root, entry).transpose()))
}

fn icon_file(
    root: &Path,
    entry: Result<DirEntry, ignore::Error>,
) -> Result<Option<IconFile>, IconError> {
    let entry = entry?;
    if !entry.file_type().is_some_and(|t| t.is_file()) {
        return Ok(None);
    }

    let path = entry.path();
    let Some(relative) = relative_name(root, path) else {
        return Ok(None);
    };
    let Some(m) = SVG_FILE.find(&relative) else {
        return Ok(None);
    };

    Ok(Some(IconFile {
        relative: relative[..m.start()].to_string(),
        path: path.to_path_buf(),
    }))
}

/// `path` relative to `root`, joined with `/` regardless of platform.
fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn collect(indir: &Path) -> Vec<IconFile> {
        discover(indir)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_discover_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "nav/settings-gear.svg", "<svg/>");
        write(dir.path(), "home.svg", "<svg/>");
        write(dir.path(), "zoom.svg", "<svg/>");

        let icons = collect(dir.path());
        let names: Vec<_> = icons.iter().map(|i| i.relative.as_str()).collect();
        assert_eq!(names, ["home", "nav/settings-gear", "zoom"]);
        assert_eq!(icons[0].path, dir.path().join("home.svg"));
        assert_eq!(icons[0].read().unwrap(), "<svg/>");
    }

    #[test]
    fn test_discover_filters_extension_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "upper.SVG", "<svg/>");
        write(dir.path(), "readme.md", "# icons");
        write(dir.path(), "notes.svg.txt", "text");
        write(dir.path(), ".hidden/dot.svg", "<svg/>");

        let icons = collect(dir.path());
        let names: Vec<_> = icons.iter().map(|i| i.relative.as_str()).collect();
        assert_eq!(names, [".hidden/dot", "upper"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(discover(&missing), Err(IconError::MissingInput(p)) if p == missing));
    }

    #[test]
    fn test_read_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.svg"), b"<svg>caf\xe9</svg>").unwrap();

        let icons = collect(dir.path());
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].read().unwrap(), "<svg>caf\u{FFFD}</svg>");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let icon = IconFile {
            relative: "gone".to_string(),
            path: dir.path().join("gone.svg"),
        };
        assert!(matches!(icon.read(), Err(IconError::Read { .. })));
    }
}
