use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: heatmap-{YYMMDD}.{extension}
pub fn generate_default_output_filename(extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("heatmap-{:02}{:02}{:02}.{}", year, month, day, extension);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_output_filename() {
        let filename = generate_default_output_filename("svg");
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.contains("heatmap-"));
        assert!(filename_str.ends_with(".svg"));
        assert!(filename_str.starts_with("output/"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "output");

        // heatmap- + YYMMDD + .svg
        assert_eq!(parts[1].len(), "heatmap-".len() + 6 + ".svg".len());
    }

    #[test]
    fn test_extension_follows_format() {
        let filename = generate_default_output_filename("html");
        assert_eq!(filename.extension().and_then(|e| e.to_str()), Some("html"));
    }
}
