use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::utils::error::Result;

/// Wire format of the marker file and of every date the API returns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read the last-extraction date from the first line of the marker file.
/// A missing or unreadable marker means "extract everything" and yields
/// `None`; this never errors.
pub fn read_marker<P: AsRef<Path>>(path: P) -> Option<NaiveDate> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            tracing::debug!("no extraction marker at {}", path.display());
            return None;
        }
    };

    let first_line = content.lines().next().unwrap_or("").trim();
    match NaiveDate::parse_from_str(first_line, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("extraction marker at {} is unreadable: {e}", path.display());
            None
        }
    }
}

/// Overwrite the marker with `date`. Last write wins.
pub fn write_marker<P: AsRef<Path>>(path: P, date: NaiveDate) -> Result<()> {
    fs::write(path, date.format(DATE_FORMAT).to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_marker_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let marker_path = temp_dir.path().join("last_extraction.txt");

        let date = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();
        write_marker(&marker_path, date).unwrap();

        assert_eq!(read_marker(&marker_path), Some(date));
    }

    #[test]
    fn test_missing_marker_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(read_marker(temp_dir.path().join("absent.txt")), None);
    }

    #[test]
    fn test_corrupt_marker_reads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let marker_path = temp_dir.path().join("last_extraction.txt");

        std::fs::write(&marker_path, "02/07/2023").unwrap();
        assert_eq!(read_marker(&marker_path), None);

        std::fs::write(&marker_path, "").unwrap();
        assert_eq!(read_marker(&marker_path), None);
    }

    #[test]
    fn test_only_the_first_line_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let marker_path = temp_dir.path().join("last_extraction.txt");

        std::fs::write(&marker_path, "2023-07-02\nscratch notes\n").unwrap();

        assert_eq!(
            read_marker(&marker_path),
            Some(NaiveDate::from_ymd_opt(2023, 7, 2).unwrap())
        );
    }

    #[test]
    fn test_write_overwrites_previous_marker() {
        let temp_dir = TempDir::new().unwrap();
        let marker_path = temp_dir.path().join("last_extraction.txt");

        write_marker(&marker_path, NaiveDate::from_ymd_opt(2023, 5, 28).unwrap()).unwrap();
        let newer = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();
        write_marker(&marker_path, newer).unwrap();

        assert_eq!(read_marker(&marker_path), Some(newer));
    }
}
