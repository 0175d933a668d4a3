use super::mock::MockFs;
use super::*;
use tempfile::TempDir;

#[test]
fn test_mock_fs_file_operations() {
    let fs = MockFs::new();

    fs.add_file("/project/components/ui/button.tsx", "export {}");
    assert!(fs.exists(Path::new("/project/components/ui/button.tsx")));
    assert!(fs.is_dir(Path::new("/project/components/ui")));
    assert!(!fs.is_dir(Path::new("/project/components/ui/button.tsx")));

    let content = fs
        .read_to_string(Path::new("/project/components/ui/button.tsx"))
        .unwrap();
    assert_eq!(content, "export {}");

    fs.write(Path::new("/project/lib/utils.ts"), b"export const cn = 1")
        .unwrap();
    assert_eq!(
        fs.content("/project/lib/utils.ts").as_deref(),
        Some("export const cn = 1")
    );
    assert_eq!(
        fs.written_paths(),
        vec![PathBuf::from("/project/lib/utils.ts")]
    );
}

#[test]
fn test_mock_fs_walk_files_is_recursive_and_skips_dirs() {
    let fs = MockFs::new();
    fs.add_dir("/project/components/empty");
    fs.add_file("/project/components/a.tsx", "");
    fs.add_file("/project/components/ui/b.ts", "");
    fs.add_file("/project/other/c.ts", "");

    let files = fs.walk_files(Path::new("/project/components"));
    assert_eq!(
        files,
        vec![
            PathBuf::from("/project/components/a.tsx"),
            PathBuf::from("/project/components/ui/b.ts"),
        ]
    );
}

#[test]
fn test_mock_fs_read_missing_file_is_error() {
    let fs = MockFs::new();
    assert!(fs.read_to_string(Path::new("/missing.ts")).is_err());
}

#[test]
fn test_real_fs_write_creates_parent_and_walks() {
    let temp = TempDir::new().unwrap();
    let fs = RealFs;
    let nested = temp.path().join("components/ui/card.tsx");

    fs.write(&nested, b"export const Card = 1").unwrap();

    assert!(fs.exists(&nested));
    assert!(fs.is_dir(&temp.path().join("components/ui")));
    assert_eq!(fs.read_to_string(&nested).unwrap(), "export const Card = 1");
    assert_eq!(fs.walk_files(&temp.path().join("components")), vec![nested]);
}

#[test]
fn test_real_fs_walk_missing_dir_is_empty() {
    let temp = TempDir::new().unwrap();
    assert!(RealFs.walk_files(&temp.path().join("nope")).is_empty());
}
