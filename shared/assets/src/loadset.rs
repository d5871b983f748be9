//! Batched loading with progress reporting.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load every path in order, invoking `progress(loaded, total)` after each
/// item the way a loading screen expects. Failures are logged and yield
/// `None` in the result slot; the exhibit continues with whatever arrived.
pub fn load_all<T>(
    paths: &[PathBuf],
    mut load: impl FnMut(&Path) -> Result<T>,
    mut progress: impl FnMut(usize, usize),
) -> Vec<Option<T>> {
    let total = paths.len();
    let mut out = Vec::with_capacity(total);
    for (done, path) in paths.iter().enumerate() {
        match load(path) {
            Ok(v) => out.push(Some(v)),
            Err(e) => {
                log::error!(target: "assets", "load {} failed: {e:#}", path.display());
                out.push(None);
            }
        }
        progress(done + 1, total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn progress_counts_every_item_and_failures_keep_slots() {
        let paths = vec![
            PathBuf::from("ok-1"),
            PathBuf::from("bad"),
            PathBuf::from("ok-2"),
        ];
        let mut seen = Vec::new();
        let out = load_all(
            &paths,
            |p| {
                if p.to_string_lossy().starts_with("ok") {
                    Ok(p.to_path_buf())
                } else {
                    Err(anyhow!("boom"))
                }
            },
            |done, total| seen.push((done, total)),
        );
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert!(out[0].is_some() && out[1].is_none() && out[2].is_some());
    }

    #[test]
    fn empty_set_reports_nothing() {
        let mut called = false;
        let out = load_all(&[], |_| Ok(()), |_, _| called = true);
        assert!(out.is_empty());
        assert!(!called);
    }
}
