use camino::{Utf8Path, Utf8PathBuf};

/// One row of the project structure table: a folder and the files it holds.
/// An empty folder name stands for the project root.
pub struct Entry {
    pub folder: &'static str,
    pub files: &'static [&'static str],
}

/// The webhook bridge skeleton. Order is meaningful: folders are processed
/// top to bottom, files left to right.
pub const LAYOUT: &[Entry] = &[
    Entry {
        folder: "config",
        files: &["config.php"],
    },
    Entry {
        folder: "src",
        files: &["ZAPIHandler.php", "ChatwootHandler.php", "Logger.php"],
    },
    Entry {
        folder: "public",
        files: &["webhook.php"],
    },
    Entry {
        folder: "logs",
        files: &["app.log"],
    },
    Entry {
        folder: "",
        files: &["composer.json"],
    },
];

impl Entry {
    /// The folder as a path, or `None` for the root entry.
    pub fn dir(&self) -> Option<&Utf8Path> {
        if self.folder.is_empty() {
            None
        } else {
            Some(Utf8Path::new(self.folder))
        }
    }

    /// Path of `file` inside this entry's folder, relative to the project
    /// root.
    pub fn file_path(&self, file: &str) -> Utf8PathBuf {
        match self.dir() {
            Some(dir) => dir.join(file),
            None => Utf8PathBuf::from(file),
        }
    }
}

/// Every path the scaffold produces, in processing order: each folder
/// followed by its files.
pub fn expected_paths() -> Vec<Utf8PathBuf> {
    let mut paths = Vec::new();
    for entry in LAYOUT {
        if let Some(dir) = entry.dir() {
            paths.push(dir.to_owned());
        }
        for file in entry.files {
            paths.push(entry.file_path(file));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_four_folders_and_seven_files() {
        let folders = LAYOUT.iter().filter(|entry| entry.dir().is_some()).count();
        let files: usize = LAYOUT.iter().map(|entry| entry.files.len()).sum();
        assert_eq!(folders, 4);
        assert_eq!(files, 7);
        assert_eq!(expected_paths().len(), 11);
    }

    #[test]
    fn root_entry_holds_the_composer_manifest() {
        let root = LAYOUT.last().unwrap();
        assert!(root.dir().is_none());
        assert_eq!(root.files, ["composer.json"]);
        assert_eq!(
            root.file_path("composer.json"),
            Utf8PathBuf::from("composer.json")
        );
    }

    #[test]
    fn paths_are_relative_and_unique() {
        let paths = expected_paths();
        for path in &paths {
            assert!(path.is_relative(), "{path} should be relative");
        }
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), paths.len());
    }
}
