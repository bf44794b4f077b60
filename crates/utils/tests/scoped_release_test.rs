//! Integration tests for handle release across success, failure, and panic paths

use proptest::prelude::*;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use with_utils::{reader_with, readers, readers_with, recover, Error, Open, Result};

/// Opener that records every open and release
#[derive(Default)]
struct TrackingOpener {
    missing: HashSet<PathBuf>,
    log: Arc<Mutex<Log>>,
}

#[derive(Default, Debug)]
struct Log {
    opened: Vec<PathBuf>,
    released: Vec<PathBuf>,
}

struct Tracked {
    name: PathBuf,
    log: Arc<Mutex<Log>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.lock().unwrap().released.push(self.name.clone());
    }
}

impl TrackingOpener {
    fn with_missing(names: &[&str]) -> Self {
        Self {
            missing: names.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    fn opened(&self) -> Vec<PathBuf> {
        self.log.lock().unwrap().opened.clone()
    }

    fn released(&self) -> Vec<PathBuf> {
        self.log.lock().unwrap().released.clone()
    }
}

impl Open for TrackingOpener {
    type Handle = Tracked;

    fn open(&self, name: &Path) -> io::Result<Tracked> {
        if self.missing.contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file or directory",
            ));
        }
        self.log.lock().unwrap().opened.push(name.to_path_buf());
        Ok(Tracked {
            name: name.to_path_buf(),
            log: Arc::clone(&self.log),
        })
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn test_all_handles_released_after_success() {
    let opener = TrackingOpener::default();

    let seen = readers_with(&opener, ["a", "b", "c"], |handles| -> Result<Vec<PathBuf>> {
        Ok(handles.iter().map(|h| h.name.clone()).collect())
    })
    .unwrap();

    assert_eq!(seen, paths(&["a", "b", "c"]));
    assert_eq!(opener.released(), paths(&["c", "b", "a"]));
}

#[test]
fn test_earlier_handles_released_when_later_open_fails() {
    let opener = TrackingOpener::with_missing(&["c"]);
    let mut called = false;

    let err = readers_with(&opener, ["a", "b", "c", "d"], |_| -> Result<()> {
        called = true;
        Ok(())
    })
    .unwrap_err();

    assert!(!called);
    assert_eq!(err.path(), Some(Path::new("c")));
    assert_eq!(opener.opened(), paths(&["a", "b"]));
    assert_eq!(opener.released(), paths(&["b", "a"]));
}

#[test]
fn test_handles_released_after_callback_error() {
    let opener = TrackingOpener::default();

    let err = readers_with(&opener, ["a", "b"], |_| -> Result<()> {
        Err(Error::message("callback error"))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "callback error");
    assert_eq!(opener.released().len(), 2);
}

#[test]
fn test_handles_released_after_callback_panic() {
    let opener = TrackingOpener::default();

    let err = recover(|| {
        readers_with(&opener, ["a", "b"], |_| -> Result<()> {
            panic!("reading went wrong")
        })
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "panic: reading went wrong");
    assert_eq!(opener.released(), paths(&["b", "a"]));
}

#[test]
fn test_single_reader_released_once() {
    let opener = TrackingOpener::default();

    reader_with(&opener, "only", |handle| -> Result<()> {
        assert_eq!(handle.name, PathBuf::from("only"));
        Ok(())
    })
    .unwrap();

    assert_eq!(opener.released(), paths(&["only"]));
}

#[test]
fn test_empty_name_list_passes_callback_error_through() {
    let names: [&str; 0] = [];

    let err = readers(names, |handles| -> Result<()> {
        assert!(handles.is_empty());
        Err(Error::message("expected error"))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "expected error");
}

#[test]
fn test_missing_files_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let present = temp_dir.path().join("README.md");
    std::fs::write(&present, "readme").unwrap();
    let missing = temp_dir.path().join("two.txt");

    let err = readers([&present, &missing], |_| -> Result<()> { Ok(()) }).unwrap_err();

    assert_eq!(err.path(), Some(missing.as_path()));
    assert!(err
        .to_string()
        .starts_with(&format!("open {}: ", missing.display())));
}

#[test]
fn test_open_failure_into_anyhow() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("one.txt");

    let err = readers([&missing], |_| -> anyhow::Result<()> { Ok(()) }).unwrap_err();

    let inner = err.downcast_ref::<Error>().expect("open failure keeps its type");
    assert_eq!(
        inner.io_error().map(io::Error::kind),
        Some(io::ErrorKind::NotFound)
    );
}

proptest! {
    #[test]
    fn test_release_invariant(count in 0usize..8, missing_at in proptest::option::of(0usize..8)) {
        let names: Vec<String> = (0..count).map(|i| format!("file-{i}")).collect();
        let missing: Vec<&str> = missing_at
            .filter(|&i| i < count)
            .map(|i| vec![names[i].as_str()])
            .unwrap_or_default();
        let opener = TrackingOpener::with_missing(&missing);

        let result = readers_with(&opener, &names, |handles| -> Result<usize> {
            Ok(handles.len())
        });

        let opened = opener.opened();
        let mut released = opener.released();
        released.reverse();
        prop_assert_eq!(&opened, &released);

        match missing_at.filter(|&i| i < count) {
            Some(i) => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.path(), Some(Path::new(&names[i])));
                prop_assert_eq!(opened.len(), i);
            }
            None => {
                prop_assert_eq!(result.unwrap(), count);
                prop_assert_eq!(opened, paths(&names.iter().map(String::as_str).collect::<Vec<_>>()));
            }
        }
    }
}
