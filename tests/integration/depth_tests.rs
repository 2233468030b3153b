use dedup::progress::ProgressCallback;
use dedup::scanner::{ExplorationPolicy, Walker};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Records every directory the walker lists.
#[derive(Default)]
struct ListedDirectories {
    count: AtomicUsize,
    paths: Mutex<Vec<String>>,
}

impl ProgressCallback for ListedDirectories {
    fn on_phase_start(&self, _phase: &str, _total: usize) {}
    fn on_progress(&self, _current: usize, path: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(path.to_string());
    }
    fn on_phase_end(&self, _phase: &str) {}
}

fn listed(root: &Path, policy: ExplorationPolicy) -> (usize, Vec<String>) {
    let recorder = Arc::new(ListedDirectories::default());
    Walker::new(root, policy)
        .with_progress_callback(recorder.clone())
        .walk()
        .unwrap();
    let paths = recorder.paths.lock().unwrap().clone();
    (recorder.count.load(Ordering::SeqCst), paths)
}

/// Build a chain of directories `l1/l2/.../lN` with one file per level,
/// named after the depth of the directory holding it.
fn create_chain(levels: usize) -> TempDir {
    let dir = tempdir().unwrap();
    let mut current = dir.path().to_path_buf();
    fs::write(current.join("f0"), "0").unwrap();
    for depth in 1..=levels {
        current = current.join(format!("l{depth}"));
        fs::create_dir(&current).unwrap();
        fs::write(current.join(format!("f{depth}")), depth.to_string()).unwrap();
    }
    dir
}

fn file_names(root: &Path, policy: ExplorationPolicy) -> BTreeSet<String> {
    Walker::new(root, policy)
        .walk()
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn expected_up_to(depth: usize) -> BTreeSet<String> {
    (0..depth).map(|d| format!("f{d}")).collect()
}

#[test]
fn test_depth_n_includes_files_of_depth_below_n() {
    let dir = create_chain(5);

    for limit in 1..=5 {
        let policy = ExplorationPolicy::depth(limit).unwrap();
        assert_eq!(
            file_names(dir.path(), policy),
            expected_up_to(limit),
            "limit {limit}"
        );
    }
}

#[test]
fn test_depth_beyond_tree_equals_recursive() {
    let dir = create_chain(3);

    let bounded = file_names(dir.path(), ExplorationPolicy::depth(50).unwrap());
    let recursive = file_names(dir.path(), ExplorationPolicy::Recursive);

    assert_eq!(bounded, recursive);
    assert_eq!(recursive, expected_up_to(4));
}

#[test]
fn test_depth_bounded_over_wide_tree() {
    // Two branches of different depth; the limit applies to each uniformly.
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a").join("aa").join("aaa")).unwrap();
    fs::create_dir_all(root.join("b").join("bb")).unwrap();
    fs::write(root.join("a").join("a1"), "").unwrap();
    fs::write(root.join("a").join("aa").join("a2"), "").unwrap();
    fs::write(root.join("a").join("aa").join("aaa").join("a3"), "").unwrap();
    fs::write(root.join("b").join("b1"), "").unwrap();
    fs::write(root.join("b").join("bb").join("b2"), "").unwrap();

    let names = file_names(root, ExplorationPolicy::depth(2).unwrap());
    let expected: BTreeSet<String> = ["a1", "b1"].iter().map(ToString::to_string).collect();
    assert_eq!(names, expected);

    let names = file_names(root, ExplorationPolicy::depth(3).unwrap());
    let expected: BTreeSet<String> = ["a1", "a2", "b1", "b2"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_directories_at_limit_are_never_listed() {
    let dir = create_chain(3);

    let (count, paths) = listed(dir.path(), ExplorationPolicy::depth(2).unwrap());
    assert_eq!(count, 2);
    assert!(paths.iter().all(|p| !p.ends_with("l2")));

    let (count, _) = listed(dir.path(), ExplorationPolicy::depth(1).unwrap());
    assert_eq!(count, 1);

    let (count, _) = listed(dir.path(), ExplorationPolicy::Recursive);
    assert_eq!(count, 4);
}

#[test]
fn test_single_level_lists_only_root() {
    let dir = create_chain(3);

    let (count, _) = listed(dir.path(), ExplorationPolicy::SingleLevel);

    assert_eq!(count, 1);
}

#[test]
fn test_single_level_equals_depth_one() {
    let dir = create_chain(3);

    assert_eq!(
        file_names(dir.path(), ExplorationPolicy::SingleLevel),
        file_names(dir.path(), ExplorationPolicy::depth(1).unwrap())
    );
}
