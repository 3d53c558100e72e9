use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Every file below `folder_path`, recursively, sorted by path. Hidden files
/// are skipped.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }

        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// `a_example.in` becomes `a_example.out`.
pub fn submission_file_name(instance: &Path) -> PathBuf {
    let stem = instance
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();

    PathBuf::from(stem).with_extension("out")
}

/// First pair of instances that would write the same submission file, as
/// `x/a.in` and `y/a.in` both give `a.out`.
pub fn find_submission_conflict(paths: &[PathBuf]) -> Option<(&Path, &Path)> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::with_capacity(paths.len());

    for path in paths {
        if let Some(previous) = seen.insert(submission_file_name(path), path) {
            return Some((previous, path));
        }
    }

    None
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
