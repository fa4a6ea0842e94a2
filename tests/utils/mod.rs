#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Convenience func to get a fixture from the standard path, as a string
pub fn fixture(s: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", s)).unwrap()
}

/// A fresh, empty scratch directory for a single test
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("steam-presence-{}-{}", name, process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Files in `dir` that look like error records
pub fn error_logs(dir: &PathBuf) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("error_") && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect()
}
