use std::path::{Component, Path, PathBuf};

/// One planned output page: where it comes from and where it lands,
/// relative to the output directory. The full list doubles as the
/// navigation manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub source: PathBuf,
    pub dest_rel: PathBuf,
}

impl PageEntry {
    pub fn new(source: PathBuf) -> Self {
        let dest_rel = destination_rel(&source);
        Self { source, dest_rel }
    }
}

/// Builds the page manifest, sorted by source path so navigation order is
/// stable across runs.
pub fn plan_pages(sources: &[PathBuf]) -> Vec<PageEntry> {
    let mut entries: Vec<PageEntry> = sources.iter().cloned().map(PageEntry::new).collect();
    entries.sort_by(|a, b| a.source.cmp(&b.source));
    entries
}

/// Mirrors a source path under the output directory with the extension
/// replaced by `.html`. Absolute sources are flattened to their file name;
/// `.` and `..` components are dropped so output never escapes the
/// output directory.
pub fn destination_rel(source: &Path) -> PathBuf {
    let mut rel = PathBuf::new();
    if source.is_absolute() {
        if let Some(name) = source.file_name() {
            rel.push(name);
        }
    } else {
        for component in source.components() {
            if let Component::Normal(part) = component {
                rel.push(part);
            }
        }
    }
    rel.set_extension("html");
    rel
}

/// The `../` prefix leading from a page back to the output root.
pub fn path_to_root(dest_rel: &Path) -> String {
    let depth = dest_rel
        .parent()
        .map(|parent| parent.components().count())
        .unwrap_or(0);
    "../".repeat(depth)
}

/// A relative path as an href, with forward slashes regardless of platform.
pub fn href(dest_rel: &Path) -> String {
    dest_rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_replaces_extension() {
        assert_eq!(
            destination_rel(Path::new("src/lib.rs")),
            PathBuf::from("src/lib.html")
        );
        assert_eq!(
            destination_rel(Path::new("flat.py")),
            PathBuf::from("flat.html")
        );
    }

    #[test]
    fn test_destination_drops_dot_components() {
        assert_eq!(
            destination_rel(Path::new("./src/lib.rs")),
            PathBuf::from("src/lib.html")
        );
        assert_eq!(
            destination_rel(Path::new("../shared/util.rs")),
            PathBuf::from("shared/util.html")
        );
    }

    #[test]
    fn test_absolute_sources_flatten_to_file_name() {
        assert_eq!(
            destination_rel(Path::new("/tmp/project/main.go")),
            PathBuf::from("main.html")
        );
    }

    #[test]
    fn test_path_to_root_matches_depth() {
        assert_eq!(path_to_root(Path::new("top.html")), "");
        assert_eq!(path_to_root(Path::new("src/lib.html")), "../");
        assert_eq!(path_to_root(Path::new("a/b/c.html")), "../../");
    }

    #[test]
    fn test_href_uses_forward_slashes() {
        let entry = PageEntry::new(PathBuf::from("src/deep/mod.rs"));
        assert_eq!(href(&entry.dest_rel), "src/deep/mod.html");
    }

    #[test]
    fn test_plan_pages_is_sorted() {
        let entries = plan_pages(&[
            PathBuf::from("zeta.rs"),
            PathBuf::from("alpha.rs"),
        ]);
        assert_eq!(entries[0].source, PathBuf::from("alpha.rs"));
        assert_eq!(entries[1].source, PathBuf::from("zeta.rs"));
    }
}
