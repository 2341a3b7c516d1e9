// tests/integration_tests/directory_rename_test.rs
use super::common::{config_for, create_test_file, run_all, tree};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_directory_and_contents_renamed_together() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "old photos/old beach.jpg", "x")?;
    create_test_file(temp_dir.path(), "old photos/old docs/old notes.txt", "y")?;

    let mut config = config_for(temp_dir.path(), &[], &["old *"]);
    config.rename_directories = true;

    let reports = run_all(&config)?;

    assert_eq!(
        tree(temp_dir.path())?,
        vec![
            "photos",
            "photos/beach.jpg",
            "photos/docs",
            "photos/docs/notes.txt",
        ]
    );
    assert_eq!(reports[1].header, "Переименованные пути:");
    assert_eq!(reports[1].lines.len(), 4);
    Ok(())
}

#[test]
fn test_directory_names_are_not_split() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("backup.2024.old"))?;

    let mut config = config_for(temp_dir.path(), &[], &["backup.*"]);
    config.rename_directories = true;

    run_all(&config)?;

    assert_eq!(tree(temp_dir.path())?, vec!["2024.old"]);
    Ok(())
}

#[test]
fn test_directories_ignored_by_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::create_dir(temp_dir.path().join("old photos"))?;
    let config = config_for(temp_dir.path(), &[], &["old *"]);

    run_all(&config)?;

    assert_eq!(tree(temp_dir.path())?, vec!["old photos"]);
    Ok(())
}
