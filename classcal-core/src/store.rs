//! Directory of event files.
//!
//! Every event is one `YYYY-MM-DD__slug.ics` file. An update writes the new
//! file before removing the old one.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::ClasscalConfig;
use crate::date_range::DateRange;
use crate::error::{CalError, CalResult};
use crate::event::CalendarEvent;
use crate::ics::{generate_ics, parse_event};
use crate::utils::slugify;

#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Store rooted at `path`. The directory is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    /// Store at the configured `calendar_dir`.
    pub fn from_config(config: &ClasscalConfig) -> Self {
        Self::open(config.data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every event, ordered by file stem (date first, then title slug).
    /// A collision copy like `slug-2` follows the `slug` it collided with.
    ///
    /// Files that fail to parse are skipped. A missing directory has no events.
    pub fn events(&self) -> CalResult<Vec<CalendarEvent>> {
        let entries = match std::fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "event directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "ics"))
            .collect();
        paths.sort_by(|a, b| a.file_stem().cmp(&b.file_stem()));

        let events: Vec<CalendarEvent> = paths
            .iter()
            .filter_map(|path| match read_event(path) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable event file");
                    None
                }
            })
            .collect();

        debug!(count = events.len(), path = %self.path.display(), "loaded events");
        Ok(events)
    }

    pub fn events_in_range(&self, range: &DateRange) -> CalResult<Vec<CalendarEvent>> {
        Ok(self
            .events()?
            .into_iter()
            .filter(|e| range.contains(e.date))
            .collect())
    }

    /// Write a new event file and return its path.
    pub fn create_event(&self, event: &CalendarEvent) -> CalResult<PathBuf> {
        std::fs::create_dir_all(&self.path)?;

        let slug = self.unique_slug_for(event)?;
        let event_path = self.path.join(format!("{}.ics", slug));

        std::fs::write(&event_path, generate_ics(event)?)?;
        debug!(id = %event.id, path = %event_path.display(), "created event");

        Ok(event_path)
    }

    /// Delete the file holding the event with `id`.
    pub fn delete_event(&self, id: &str) -> CalResult<CalendarEvent> {
        let (path, event) = self.find_event(id)?;

        std::fs::remove_file(&path)?;
        debug!(id, path = %path.display(), "deleted event");

        Ok(event)
    }

    /// Replace the event with `id` by `event`.
    ///
    /// The old file is only removed once the new one is written, so a failed
    /// update leaves the original event in place.
    pub fn update_event(&self, id: &str, event: &CalendarEvent) -> CalResult<PathBuf> {
        let (old_path, _) = self.find_event(id)?;
        let content = generate_ics(event)?;

        let base = base_slug_for(event);
        let new_path = if stem_belongs_to(&old_path, &base) {
            old_path.clone()
        } else {
            self.path.join(format!("{}.ics", self.unique_slug_for(event)?))
        };

        std::fs::write(&new_path, content)?;
        if new_path != old_path {
            std::fs::remove_file(&old_path)?;
        }
        debug!(id, path = %new_path.display(), "updated event");

        Ok(new_path)
    }

    fn find_event(&self, id: &str) -> CalResult<(PathBuf, CalendarEvent)> {
        self.event_files()?
            .into_iter()
            .find(|(_, e)| e.id == id)
            .ok_or_else(|| CalError::EventNotFound(id.to_string()))
    }

    fn event_files(&self) -> CalResult<Vec<(PathBuf, CalendarEvent)>> {
        let entries = match std::fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "ics"))
            .filter_map(|path| read_event(&path).ok().map(|event| (path, event)))
            .collect())
    }

    fn unique_slug_for(&self, event: &CalendarEvent) -> CalResult<String> {
        let base = base_slug_for(event);

        if !self.path.join(format!("{}.ics", base)).exists() {
            return Ok(base);
        }

        // Collision - try suffixes
        for n in 2..=100 {
            let suffixed = format!("{}-{}", base, n);
            if !self.path.join(format!("{}.ics", suffixed)).exists() {
                return Ok(suffixed);
            }
        }

        Err(CalError::Store(format!(
            "Too many event file name collisions for '{}'",
            base
        )))
    }
}

fn read_event(path: &Path) -> CalResult<CalendarEvent> {
    let content = std::fs::read_to_string(path)?;

    parse_event(&content)
        .ok_or_else(|| CalError::IcsParse(format!("Failed to parse event from {}", path.display())))
}

/// Whether `path` is `base.ics` or one of its `base-N.ics` collision copies.
fn stem_belongs_to(path: &Path, base: &str) -> bool {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };

    match stem.strip_prefix(base) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('-')
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())),
        None => false,
    }
}

/// `YYYY-MM-DD__slug`
fn base_slug_for(event: &CalendarEvent) -> String {
    let slug = slugify(&event.title);
    let slug = if slug.is_empty() { "event".to_string() } else { slug };

    format!("{}__{}", event.date.format("%Y-%m-%d"), slug)
}
