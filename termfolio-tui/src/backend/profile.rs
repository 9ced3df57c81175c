//! Profile loading

use std::fs;
use std::path::Path;

use termfolio_core::{CoreError, CoreResult, Profile};

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> CoreResult<Profile> {
    if !path.exists() {
        return Err(CoreError::ProfileNotFound(path.display().to_string()));
    }
    let content =
        fs::read_to_string(path).map_err(|err| CoreError::StorageError(err.to_string()))?;
    let profile = serde_json::from_str(&content)
        .map_err(|err| CoreError::SerializationError(err.to_string()))?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termfolio_core::content::sample_profile;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("termfolio-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(_)));
    }

    #[test]
    fn invalid_json_is_reported_as_serialization_error() {
        let path = scratch_file("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, CoreError::SerializationError(_)));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn well_formed_profile_loads() {
        let path = scratch_file("profile.json");
        let raw = serde_json::to_string(&sample_profile()).unwrap();
        fs::write(&path, raw).unwrap();
        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.name, "Jordan Reyes");
        assert_eq!(profile.experience.len(), 3);
        let _ = fs::remove_file(&path);
    }
}
