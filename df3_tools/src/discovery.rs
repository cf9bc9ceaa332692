//! Discovery of input layers by file name prefix

use std::{
    fs,
    path::{is_separator, Path, PathBuf},
};

use df3_lib::{Df3Error, Result};

/// Split prefix into directory to search and file name prefix.
/// Directory is `None` when prefix has no directory part.
fn split_prefix(prefix: &str) -> (Option<&Path>, &str) {
    if prefix.ends_with(is_separator) {
        return (Some(Path::new(prefix)), "");
    }

    let path = Path::new(prefix);
    match (path.parent(), path.file_name().and_then(|n| n.to_str())) {
        (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => (Some(dir), name),
        (_, Some(name)) => (None, name),
        // "..", "/"
        (_, None) => (Some(path), ""),
    }
}

/// All regular files whose path starts with `prefix`, sorted by path.
/// `exclude` (the output file) is never returned.
pub fn find_layers(prefix: &str, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let (dir, name_prefix) = split_prefix(prefix);
    let exclude = exclude.and_then(|p| fs::canonicalize(p).ok());

    let mut files = vec![];
    for entry in fs::read_dir(dir.unwrap_or_else(|| Path::new(".")))? {
        let entry = entry?;
        let name = entry.file_name();
        let matches = name
            .to_str()
            .map(|n| n.starts_with(name_prefix))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        let path = match dir {
            Some(d) => d.join(&name),
            None => PathBuf::from(&name),
        };
        if !path.is_file() {
            continue;
        }
        if exclude.is_some() && fs::canonicalize(&path).ok() == exclude {
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(Df3Error::NoInput(format!(
            "no files found with prefix '{prefix}'"
        )));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod test {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn prefix_parts() {
        assert_eq!(split_prefix("layer"), (None, "layer"));
        assert_eq!(split_prefix("out/layer"), (Some(Path::new("out")), "layer"));
        assert_eq!(split_prefix("out/"), (Some(Path::new("out/")), ""));
        assert_eq!(split_prefix(".."), (Some(Path::new("..")), ""));
    }

    #[test]
    fn sorted_matches_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "layer10.tga");
        touch(dir.path(), "layer02.tga");
        touch(dir.path(), "other.tga");
        fs::create_dir(dir.path().join("layer_dir")).unwrap();

        let prefix = dir.path().join("layer").display().to_string();
        let files = find_layers(&prefix, None).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("layer02.tga"), dir.path().join("layer10.tga")]
        );
    }

    #[test]
    fn output_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let layer = touch(dir.path(), "layer0.tga");
        let output = touch(dir.path(), "layers.df3");

        let prefix = dir.path().join("layer").display().to_string();
        let files = find_layers(&prefix, Some(&output)).unwrap();
        assert_eq!(files, vec![layer]);
    }

    #[test]
    fn nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("layer").display().to_string();
        let err = find_layers(&prefix, None).unwrap_err();
        assert_eq!(err.kind(), "NoInput");
        assert!(err.to_string().contains("layer"));
    }
}
