//! Conversion progress events
//!
//! The pipeline reports what it found through a [`ConvertEventSink`] so the
//! CLI can render verbose text, an NDJSON stream, or nothing at all.

use std::path::PathBuf;

/// Event emitted while converting a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent {
    /// Both templates were read
    TemplatesLoaded { makefile: PathBuf, link_script: PathBuf },

    /// Project directory and descriptors were found
    ProjectLocated { dir: PathBuf, name: String },

    /// Linked sources were classified
    SourcesCollected {
        c_sources: usize,
        asm_sources: usize,
        libraries: usize,
    },

    /// Release build settings were read
    SettingsExtracted {
        target_part: String,
        link_script: String,
    },

    /// One include path, per toolchain
    IncludePath { tool: &'static str, path: String },

    /// One `-D` define string, per toolchain
    Defines { tool: &'static str, defines: String },

    /// Target part mapped to compiler flags
    TargetResolved {
        part: String,
        flags: String,
        /// Several table entries with different flags matched
        ambiguous: bool,
    },

    /// Memory layout lifted from the linker script
    LayoutAnalyzed { link_script: PathBuf },

    /// An output artifact was written
    FileCreated { path: PathBuf },
}

/// Trait for receiving conversion events
pub trait ConvertEventSink {
    fn on_event(&self, event: ConvertEvent);

    /// Whether per-path and per-define events are wanted.
    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Sink that drops everything
pub struct NoopEventSink;

impl ConvertEventSink for NoopEventSink {
    fn on_event(&self, _event: ConvertEvent) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Sink that records every event
    #[derive(Clone, Default)]
    pub struct RecordingEventSink {
        pub events: Arc<Mutex<Vec<ConvertEvent>>>,
        pub detailed: bool,
    }

    impl RecordingEventSink {
        pub fn detailed() -> Self {
            Self {
                detailed: true,
                ..Self::default()
            }
        }

        pub fn take(&self) -> Vec<ConvertEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl ConvertEventSink for RecordingEventSink {
        fn on_event(&self, event: ConvertEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn wants_detailed_events(&self) -> bool {
            self.detailed
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::default();

        sink.on_event(ConvertEvent::FileCreated {
            path: PathBuf::from("/p/Makefile"),
        });

        assert_eq!(sink.take().len(), 1);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn noop_sink_is_not_detailed() {
        assert!(!NoopEventSink.wants_detailed_events());
    }
}
