use std::{fs::File, path::{Path, PathBuf}};

use log::{debug, error};

use crate::word_filtering::reader_to_words;

/// Collects the words of every file in `files`, in file order.
///
/// Files that cannot be read are logged and skipped.
pub fn words_from_files<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Vec<String> {
    let mut words = vec![];
    for file_path in files {
        let file_path = file_path.as_ref();
        match words_in_file(file_path) {
            Ok(file_words) => {
                debug!("{} words read from {:?}", file_words.len(), file_path);
                words.extend(file_words);
            },
            Err(err) => error!("Error reading words in {:?};
            error: {}", file_path, err),
        }
    }
    words
}

fn words_in_file(file_path: &Path) -> std::io::Result<Vec<String>> {
    let file_handle = File::open(file_path)?;
    reader_to_words(file_handle)
}

/// Keeps the paths that point to existing regular files, logging the rest.
pub fn existing_files<'a>(paths: impl Iterator<Item = &'a String>) -> Vec<PathBuf> {
    paths
        .map(PathBuf::from)
        .filter(|p| {
            if !p.exists() {
                error!("{:?} does not exist", p);
                return false;
            }
            if !p.is_file() {
                error!("{:?} is not a file", p);
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_words_from_files() {
        let dir = env::temp_dir().join(format!("stemmed_set_fs_helpers_{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let first = dir.join("first.txt");
        let second = dir.join("second.txt");
        fs::write(&first, "cameras university\nnavigate").unwrap();
        fs::write(&second, "camera, eggs; spam").unwrap();
        let invalid = dir.join("invalid.txt");
        fs::write(&invalid, [b'n', b'a', b'v', 0xff, b' ', b'x']).unwrap();
        let missing = dir.join("missing.txt");

        let words = words_from_files([&first, &missing, &invalid, &second]);
        assert_eq!(words, vec!["cameras", "university", "navigate", "camera", "eggs", "spam"]);

        let paths: Vec<String> = [&first, &missing]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .chain([dir.to_string_lossy().into_owned()])
            .collect();
        assert_eq!(existing_files(paths.iter()), vec![first.clone()]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
