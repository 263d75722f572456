use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::errors::{CombinerError, Result};
use crate::settings::CombinerSettings;

/// Location for saving a merged clip next to its left source asset.
///
/// The file is named `"<candidate>__<timestamp>.<ext>"`, with the timestamp
/// and extension taken from `settings`, and placed in the folder of
/// `source_asset`. Fails with [`CombinerError::InvalidArgument`] when the
/// configured timestamp format is not a valid `strftime` pattern.
pub fn combined_asset_path(
    source_asset: &Path,
    candidate: &str,
    timestamp: NaiveDateTime,
    settings: &CombinerSettings,
) -> Result<PathBuf> {
    let mut stamp = String::new();
    write!(stamp, "{}", timestamp.format(&settings.timestamp_format)).map_err(|_| {
        CombinerError::InvalidArgument(format!("bad timestamp format '{}'", settings.timestamp_format))
    })?;

    let folder = source_asset.parent().unwrap_or(Path::new(""));
    Ok(folder.join(format!("{candidate}__{stamp}.{}", settings.asset_extension)))
}

/// [`combined_asset_path`] stamped with the current local time.
pub fn combined_asset_path_now(source_asset: &Path, candidate: &str, settings: &CombinerSettings) -> Result<PathBuf> {
    combined_asset_path(source_asset, candidate, chrono::Local::now().naive_local(), settings)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn names_asset_after_candidate_and_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap();
        let path = combined_asset_path(
            Path::new("Assets/Gestures/smile.anim"),
            "smile_wink",
            timestamp,
            &CombinerSettings::default(),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("Assets/Gestures/smile_wink__2024-03-09_070502.anim"));
    }

    #[test]
    fn bare_file_name_lands_in_current_folder() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let settings = CombinerSettings::default().with_asset_extension("json");
        let path = combined_asset_path(Path::new("smile.anim"), "combo", timestamp, &settings).unwrap();
        assert_eq!(path, PathBuf::from("combo__2024-12-31_235959.json"));
    }

    #[test]
    fn invalid_timestamp_format_is_rejected() {
        let settings = CombinerSettings {
            timestamp_format: "%Y-%Q".to_owned(),
            ..Default::default()
        };
        let result = combined_asset_path_now(Path::new("smile.anim"), "combo", &settings);
        assert!(matches!(result, Err(CombinerError::InvalidArgument(_))));
    }
}
