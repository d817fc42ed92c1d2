//! Tests for the file system image store

#[cfg(test)]
mod tests {
    use crate::gray_strip;
    use std::fs;
    use tempfile::TempDir;
    use unshred::ReassemblyError;
    use unshred::io::store::{FileSystemStore, ImageStore};

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/strip.png");
        let strip = gray_strip(&[&[0, 10, 20], &[30, 40, 50]]);
        let store = FileSystemStore::new();

        store.save(&strip, &path).unwrap();
        assert!(path.exists());

        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded, strip);
    }

    #[test]
    fn test_list_files_is_sorted_and_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.png"), b"x").unwrap();
        fs::write(temp_dir.path().join("a.png"), b"x").unwrap();
        fs::write(temp_dir.path().join("c.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();

        let files = FileSystemStore::new().list_files(temp_dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.txt"]);
    }

    #[test]
    fn test_list_files_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = FileSystemStore::new().list_files(&missing);
        assert!(matches!(
            result,
            Err(ReassemblyError::DirectoryNotFound { path }) if path == missing
        ));
    }

    #[test]
    fn test_list_files_on_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("strip.png");
        fs::write(&file, b"x").unwrap();

        let result = FileSystemStore::new().list_files(&file);
        assert!(matches!(
            result,
            Err(ReassemblyError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").unwrap();

        let result = FileSystemStore::new().load(&path);
        assert!(matches!(
            result,
            Err(ReassemblyError::ImageDecode { path: ref p, .. }) if *p == path
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemStore::new().load(&temp_dir.path().join("absent.png"));
        assert!(matches!(result, Err(ReassemblyError::ImageDecode { .. })));
    }

    #[test]
    fn test_load_directory_uses_listing_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSystemStore::new();
        let first = gray_strip(&[&[1, 1]]);
        let second = gray_strip(&[&[2, 2], &[3, 3]]);
        store.save(&second, &temp_dir.path().join("02.png")).unwrap();
        store.save(&first, &temp_dir.path().join("01.png")).unwrap();

        let strips = store.load_directory(temp_dir.path()).unwrap();
        assert_eq!(strips, vec![first, second]);
    }

    #[test]
    fn test_show_writes_preview() {
        let temp_dir = TempDir::new().unwrap();
        let preview = temp_dir.path().join("preview.png");
        let store = FileSystemStore::with_preview_path(&preview);
        assert_eq!(store.preview_path(), preview.as_path());

        let strip = gray_strip(&[&[5, 6]]);
        store.show(&strip).unwrap();
        assert_eq!(store.load(&preview).unwrap(), strip);
    }
}
