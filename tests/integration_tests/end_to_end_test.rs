// tests/integration_tests/end_to_end_test.rs
use super::common::{config_for, create_test_file, run_all, setup_test_directory, tree};
use anyhow::Result;
use fstidy::{Args, execute};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_delete_and_rename_whole_tree() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = config_for(
        temp_dir.path(),
        &["example.txt"],
        &["abc*", "*111*", "1*3*5"],
    );

    let reports = run_all(&config)?;

    assert_eq!(
        tree(temp_dir.path())?,
        vec![
            "123.txt",
            "24.txt",
            "aabb.txt",
            "keep.md",
            "nested",
            "nested/old.log",
        ]
    );
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].header, "Удалённые файлы:");
    assert_eq!(reports[0].lines.len(), 2);
    assert_eq!(reports[1].header, "Переименованные файлы:");
    assert_eq!(reports[1].lines.len(), 4);
    assert!(reports[1].lines.iter().all(|line| line.contains(" => ")));
    Ok(())
}

#[test]
fn test_empty_capture_keeps_only_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "example.txt", "x")?;
    create_test_file(temp_dir.path(), "foo.txt", "y")?;
    let config = config_for(temp_dir.path(), &["example.txt"], &["foo*"]);

    run_all(&config)?;

    // The whole stem was literal, so only the extension is left.
    assert_eq!(tree(temp_dir.path())?, vec![".txt"]);
    assert_eq!(fs::read_to_string(temp_dir.path().join(".txt"))?, "y");
    Ok(())
}

#[test]
fn test_disabled_actions_do_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let before = tree(temp_dir.path())?;
    let config = config_for(temp_dir.path(), &["example.txt"], &["abc*"]);

    let args = Args {
        no_delete: true,
        no_rename: true,
        ..Args::default()
    };
    let reports = execute(&args, &config)?;

    assert!(reports.is_empty());
    assert_eq!(tree(temp_dir.path())?, before);
    Ok(())
}

#[test]
fn test_delete_only_leaves_names_alone() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = config_for(temp_dir.path(), &["example.txt"], &["abc*"]);

    let args = Args {
        no_rename: true,
        ..Args::default()
    };
    let reports = execute(&args, &config)?;

    assert_eq!(reports.len(), 1);
    assert!(temp_dir.path().join("abc 123.txt").is_file());
    assert!(!temp_dir.path().join("example.txt").exists());
    Ok(())
}

#[test]
fn test_deleted_file_is_not_renamed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "old example.txt", "x")?;
    let config = config_for(temp_dir.path(), &["old example.txt"], &["old *"]);

    let reports = run_all(&config)?;

    assert!(tree(temp_dir.path())?.is_empty());
    assert_eq!(reports[0].lines.len(), 1);
    assert!(reports[1].lines.is_empty());
    Ok(())
}

#[test]
fn test_matching_directory_is_not_deleted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir(temp_dir.path().join("example.txt"))?;
    let config = config_for(temp_dir.path(), &["example.txt"], &[]);

    let reports = run_all(&config)?;

    assert!(temp_dir.path().join("example.txt").is_dir());
    assert!(reports[0].lines.is_empty());
    Ok(())
}
