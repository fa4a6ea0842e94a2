use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Append a human readable error record to `error_<unix time>.log` in `dir`
pub fn write_error_log(dir: &Path, error: &dyn Display) -> io::Result<PathBuf> {
    let now = Utc::now();
    let path = dir.join(format!("error_{}.log", now.timestamp()));

    let mut f = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(f, "{} {}", now.to_rfc3339(), error)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;
    use std::fs;
    use std::process;

    #[test]
    fn appends_one_line_per_error() {
        let dir = env::temp_dir().join(format!("steam-presence-errlog-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();

        let first = write_error_log(&dir, &"Discord not found").unwrap();
        let second = write_error_log(&dir, &"Discord not found again").unwrap();

        let name = first.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("error_") && name.ends_with(".log"));

        let contents = if first == second {
            fs::read_to_string(&first).unwrap()
        } else {
            fs::read_to_string(&first).unwrap() + &fs::read_to_string(&second).unwrap()
        };
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.contains("Discord not found again"));
    }
}
