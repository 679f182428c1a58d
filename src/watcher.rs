//! File watching for roadmap document changes.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Watch the roadmap file and raise the shared reload flag on change.
///
/// Watches the parent directory because editors often replace the file
/// instead of writing in place; events are matched by file name. Returns
/// None when the watcher cannot be created, in which case the dashboard
/// keeps rendering the startup snapshot.
pub fn watch_roadmap(path: &Path, reload: Arc<Mutex<bool>>) -> Option<RecommendedWatcher> {
    let file_name = path.file_name()?.to_os_string();
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let mut watcher = RecommendedWatcher::new(
        move |event: Result<notify::Event, notify::Error>| {
            let Ok(event) = event else { return };
            let matches = event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()));
            if matches {
                if let Ok(mut flag) = reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    )
    .ok()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive).ok()?;

    Some(watcher)
}
