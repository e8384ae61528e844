use chrono::Local;

const MAX_ENTRIES: usize = 200;

/// Bounded in-app activity feed shown beside the transcript. Holds the
/// request lifecycle breadcrumbs ("sending message to backend...", "reply
/// received", failures).
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let stamped = format!("{} {}", Local::now().format("%H:%M:%S"), entry.into());
        self.entries.push(stamped);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_arrival_order() {
        let mut log = ActivityLog::new();
        log.add("first");
        log.add("second");

        assert_eq!(log.len(), 2);
        assert!(log.entries()[0].ends_with("first"));
        assert!(log.entries()[1].ends_with("second"));
    }

    #[test]
    fn oldest_entries_fall_off_past_the_cap() {
        let mut log = ActivityLog::new();
        for i in 0..MAX_ENTRIES + 50 {
            log.add(format!("entry {}", i));
        }

        assert_eq!(log.len(), MAX_ENTRIES);
        assert!(log.entries()[0].ends_with("entry 50"));
        assert!(log.entries().last().unwrap().ends_with(&format!(
            "entry {}",
            MAX_ENTRIES + 49
        )));
    }
}
