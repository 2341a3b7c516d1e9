// tests/integration_tests/exclude_test.rs
use super::common::{config_for, create_test_file, run_all};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_excluded_subtree_is_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), ".git/example.txt", "keep")?;
    create_test_file(temp_dir.path(), "vendor/lib/example.txt", "keep")?;
    create_test_file(temp_dir.path(), "src/example.txt", "delete")?;

    let mut config = config_for(temp_dir.path(), &["example.txt"], &[]);
    config.exclude = vec![String::from(".git"), String::from("vendor/*")];

    let reports = run_all(&config)?;

    assert!(temp_dir.path().join(".git/example.txt").is_file());
    assert!(temp_dir.path().join("vendor/lib/example.txt").is_file());
    assert!(!temp_dir.path().join("src/example.txt").exists());
    assert_eq!(reports[0].lines.len(), 1);
    Ok(())
}

#[test]
fn test_invalid_exclude_aborts_before_changes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "example.txt", "keep")?;

    let mut config = config_for(temp_dir.path(), &["example.txt"], &[]);
    config.exclude = vec![String::from("[oops")];

    assert!(run_all(&config).is_err());
    assert!(temp_dir.path().join("example.txt").is_file());
    Ok(())
}
