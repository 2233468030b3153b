use dedup::duplicates::{DuplicateFinder, DuplicateGroups, FinderConfig};
use dedup::scanner::{hash_to_hex, ExplorationPolicy, Hasher};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

fn group_sets(groups: &DuplicateGroups) -> BTreeSet<BTreeSet<PathBuf>> {
    groups
        .iter()
        .map(|g| g.paths.iter().cloned().collect())
        .collect()
}

#[test]
fn test_find_hello_world_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let groups = dedup::find(dir.path(), ExplorationPolicy::SingleLevel).unwrap();

    let key = hash_to_hex(&Hasher::hash_bytes(b"hello"));
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups.get(&key).unwrap(),
        &[dir.path().join("a.txt"), dir.path().join("b.txt")]
    );
    assert!(groups
        .iter()
        .all(|g| !g.paths.contains(&dir.path().join("c.txt"))));
}

#[test]
fn test_find_empty_directory() {
    let dir = tempdir().unwrap();

    let (groups, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.duplicate_groups, 0);
}

#[test]
fn test_find_unique_files() {
    let dir = tempdir().unwrap();
    for (name, content) in [
        ("a.txt", "content a"),
        ("b.txt", "content b"),
        ("c.txt", "content c"),
    ] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    let (groups, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 3);
}

#[test]
fn test_subdirectory_duplicate_single_level_vs_recursive() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("a.txt"), "shared").unwrap();
    fs::write(sub.join("d.txt"), "shared").unwrap();

    let single = dedup::find(dir.path(), ExplorationPolicy::SingleLevel).unwrap();
    assert!(single.is_empty());

    let recursive = dedup::find(dir.path(), ExplorationPolicy::Recursive).unwrap();
    let expected: BTreeSet<BTreeSet<PathBuf>> =
        [[dir.path().join("a.txt"), sub.join("d.txt")].into_iter().collect()]
            .into_iter()
            .collect();
    assert_eq!(group_sets(&recursive), expected);
}

#[test]
fn test_find_multiple_groups() {
    let dir = tempdir().unwrap();
    for name in ["1a.txt", "1b.txt", "1c.txt"] {
        fs::write(dir.path().join(name), "group1").unwrap();
    }
    for name in ["2a.txt", "2b.txt"] {
        fs::write(dir.path().join(name), "group2").unwrap();
    }
    fs::write(dir.path().join("solo.txt"), "alone").unwrap();

    let (groups, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(summary.total_files, 6);
    assert_eq!(summary.duplicate_groups, 2);
    assert_eq!(summary.duplicate_files, 3);
    assert!(groups.iter().all(|g| g.len() >= 2));
}

#[test]
fn test_group_order_follows_discovery() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("m").join("n");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("c"), "same").unwrap();
    fs::write(dir.path().join("m").join("b"), "same").unwrap();
    fs::write(dir.path().join("z"), "same").unwrap();

    let groups = dedup::find(dir.path(), ExplorationPolicy::Recursive).unwrap();

    let key = hash_to_hex(&Hasher::hash_bytes(b"same"));
    // Breadth-first: depth 0, then depth 1, then depth 2.
    assert_eq!(
        groups.get(&key).unwrap(),
        &[dir.path().join("z"), dir.path().join("m").join("b"), deep.join("c")]
    );
}

#[test]
fn test_find_is_idempotent() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("a"), "x").unwrap();
    fs::write(dir.path().join("b"), "y").unwrap();
    fs::write(sub.join("c"), "x").unwrap();
    fs::write(sub.join("d"), "y").unwrap();

    let first = dedup::find(dir.path(), ExplorationPolicy::Recursive).unwrap();
    let second = dedup::find(dir.path(), ExplorationPolicy::Recursive).unwrap();

    assert_eq!(group_sets(&first), group_sets(&second));
    assert_eq!(first.len(), 2);
}

#[test]
fn test_paths_are_joined_onto_given_root() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "x").unwrap();
    fs::write(dir.path().join("b"), "x").unwrap();

    // Not canonicalized: the `.` component survives into the results.
    let root = dir.path().join(".");

    let groups = dedup::find(&root, ExplorationPolicy::SingleLevel).unwrap();

    assert_eq!(groups.len(), 1);
    for group in groups.iter() {
        for path in group.paths {
            assert!(path.starts_with(&root));
        }
    }
}

#[test]
fn test_finder_with_progress_and_chunk_size() {
    use dedup::progress::Progress;
    use std::sync::Arc;

    let dir = tempdir().unwrap();
    let content = vec![42u8; 3000];
    fs::write(dir.path().join("a.bin"), &content).unwrap();
    fs::write(dir.path().join("b.bin"), &content).unwrap();

    let config = FinderConfig::default()
        .with_chunk_size(100)
        .with_progress_callback(Arc::new(Progress::new(true)));
    let (groups, _) = DuplicateFinder::new(config)
        .find_duplicates(dir.path())
        .unwrap();

    let key = hash_to_hex(&Hasher::hash_bytes(&content));
    assert_eq!(groups.get(&key).map(<[PathBuf]>::len), Some(2));
}
