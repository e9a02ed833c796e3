//! Build Event Port
//!
//! Observable progress for layer builds. The console view prints step lines,
//! the JSON view emits NDJSON events.

use std::path::PathBuf;

/// Event emitted during a layer build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Build started
    Started { runtime: String, manifest: PathBuf },

    /// Staging directory was recreated and the manifest copied next to it
    StagingPrepared { staging_dir: PathBuf },

    /// Image pull started
    PullingImage { image: String },

    /// Dependency installation started
    InstallingDependencies {
        container_platform: String,
        wheel_platform: String,
    },

    /// Archive creation started
    Compressing { archive: PathBuf },

    /// Archive written
    Completed { archive: PathBuf, size_bytes: u64 },
}

impl BuildEvent {
    /// Stable event step name used in JSON output
    pub fn step(&self) -> &'static str {
        match self {
            BuildEvent::Started { .. } => "started",
            BuildEvent::StagingPrepared { .. } => "staging_prepared",
            BuildEvent::PullingImage { .. } => "pulling_image",
            BuildEvent::InstallingDependencies { .. } => "installing_dependencies",
            BuildEvent::Compressing { .. } => "compressing",
            BuildEvent::Completed { .. } => "completed",
        }
    }
}

/// Trait for receiving build events
pub trait BuildEventSink {
    fn on_event(&self, event: BuildEvent);
}

/// Sink that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBuildEventSink;

impl BuildEventSink for NoopBuildEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CollectingSink {
        events: RefCell<Vec<BuildEvent>>,
    }

    impl BuildEventSink for CollectingSink {
        fn on_event(&self, event: BuildEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn collecting_sink_receives_events() {
        let sink = CollectingSink {
            events: RefCell::new(Vec::new()),
        };
        sink.on_event(BuildEvent::PullingImage {
            image: "python:3.12-slim".to_string(),
        });

        assert_eq!(sink.events.borrow()[0].step(), "pulling_image");
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopBuildEventSink.on_event(BuildEvent::Compressing {
            archive: PathBuf::from("output/a.zip"),
        });
    }
}
