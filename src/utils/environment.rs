use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the corpus location
pub const CORPUS_ENV_VAR: &str = "QURAN_CORPUS";

/// Corpus file name produced by the corpus generation step
pub const CORPUS_FILENAME: &str = "quran_data_full.json";

/// Resolve the corpus file location.
///
/// Precedence: explicit path, `QURAN_CORPUS`, `./quran_data_full.json`, then
/// `<data dir>/quran-explorer/quran_data_full.json`. When none of the defaults
/// exist the working-directory path is returned so the loader can report it as
/// missing.
pub fn resolve_corpus_path(explicit: Option<&Path>) -> PathBuf {
    let from_env = env::var_os(CORPUS_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from);
    resolve_corpus_path_internal(explicit, from_env, dirs::data_dir())
}

/// Internal helper with injectable env and data dir (for testing)
pub(crate) fn resolve_corpus_path_internal(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = from_env {
        return path;
    }

    let local = PathBuf::from(CORPUS_FILENAME);
    if local.exists() {
        return local;
    }

    if let Some(data_dir) = data_dir {
        let shared = data_dir.join("quran-explorer").join(CORPUS_FILENAME);
        if shared.exists() {
            return shared;
        }
    }

    local
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_corpus_path_internal(
            Some(Path::new("/data/corpus.json")),
            Some(PathBuf::from("/env/corpus.json")),
            None,
        );
        assert_eq!(path, PathBuf::from("/data/corpus.json"));
    }

    #[test]
    fn test_env_var_beats_defaults() {
        let path =
            resolve_corpus_path_internal(None, Some(PathBuf::from("/env/corpus.json")), None);
        assert_eq!(path, PathBuf::from("/env/corpus.json"));
    }

    #[test]
    fn test_data_dir_used_when_present() {
        let data_dir = TempDir::new().unwrap();
        let shared = data_dir.path().join("quran-explorer");
        std::fs::create_dir(&shared).unwrap();
        std::fs::write(shared.join(CORPUS_FILENAME), "{}").unwrap();

        let path = resolve_corpus_path_internal(None, None, Some(data_dir.path().to_path_buf()));

        // The working directory of the test run has no corpus file
        if !Path::new(CORPUS_FILENAME).exists() {
            assert_eq!(path, shared.join(CORPUS_FILENAME));
        }
    }

    #[test]
    fn test_falls_back_to_working_directory() {
        let data_dir = TempDir::new().unwrap();
        let path = resolve_corpus_path_internal(None, None, Some(data_dir.path().to_path_buf()));
        assert_eq!(path, PathBuf::from(CORPUS_FILENAME));
    }
}
