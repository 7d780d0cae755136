//! Temporary roster and city-table files for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const ROSTER: &str = r#"[
  {"_id": "m1", "name": "Ada Park", "major": "Computer Science", "year": "2026",
   "dev": true, "home": "Hanover, NH"},
  {"_id": "m2", "name": "Ben Ortiz", "major": "Computer Science", "year": "2026",
   "dev": true, "home": "Lyme, NH"},
  {"_id": "m3", "name": "Cal Reyes", "major": "Economics", "year": "2025",
   "roles": {"des": true, "mentor": true}, "home": "Austin TX"},
  {"_id": "m4", "name": "Dee Shah", "major": "Computer Science", "year": "2025",
   "home": "Atlantis"}
]"#;

pub(super) const CITIES: &str = "city,state_id,lat,lng\n\
                                 Hanover,NH,43.7,-72.3\n\
                                 Austin,TX,30.27,-97.74\n";

/// A temporary directory holding a roster and a cities CSV.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let workspace = Self { _dir: dir, root };
        write_utf8(&workspace.roster(), ROSTER.as_bytes());
        write_utf8(&workspace.cities(), CITIES.as_bytes());
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn roster(&self) -> Utf8PathBuf {
        self.root.join("roster.json")
    }

    pub(super) fn cities(&self) -> Utf8PathBuf {
        self.root.join("uscities.csv")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Parse captured stdout as JSON.
pub(super) fn stdout_json(buffer: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("stdout should be JSON")
}
