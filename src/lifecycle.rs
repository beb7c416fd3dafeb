//! Explicit screen lifecycle: an event emitter the presentation layer
//! drives directly at well-defined transition points.

/// Lifecycle transition points for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

impl LifecycleEvent {
    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::Created => "created",
            LifecycleEvent::Started => "started",
            LifecycleEvent::Resumed => "resumed",
            LifecycleEvent::Paused => "paused",
            LifecycleEvent::Stopped => "stopped",
            LifecycleEvent::Destroyed => "destroyed",
        }
    }
}

/// Current stage of a tracked screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleStage {
    #[default]
    Initialized,
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

/// Observer of lifecycle transitions.
pub trait LifecycleObserver {
    fn on_event(&mut self, event: LifecycleEvent);
}

/// Observer that logs each transition at info level.
pub struct LogObserver;

impl LifecycleObserver for LogObserver {
    fn on_event(&mut self, event: LifecycleEvent) {
        tracing::info!(event = event.name(), "screen lifecycle");
    }
}

/// Tracks a screen's lifecycle stage and dispatches events to observers.
///
/// Invalid transitions (e.g. `Resumed` before `Started`) are ignored,
/// so emitters do not have to re-check the current stage.
pub struct LifecycleTracker {
    stage: LifecycleStage,
    observers: Vec<Box<dyn LifecycleObserver>>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self {
            stage: LifecycleStage::Initialized,
            observers: Vec::new(),
        }
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    pub fn observe(&mut self, observer: impl LifecycleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply a lifecycle event. Returns true when the transition was
    /// valid and observers were notified.
    pub fn emit(&mut self, event: LifecycleEvent) -> bool {
        let Some(next) = next_stage(self.stage, event) else {
            tracing::debug!(
                event = event.name(),
                stage = ?self.stage,
                "ignoring invalid lifecycle transition"
            );
            return false;
        };
        self.stage = next;
        for observer in &mut self.observers {
            observer.on_event(event);
        }
        true
    }
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn next_stage(stage: LifecycleStage, event: LifecycleEvent) -> Option<LifecycleStage> {
    use LifecycleEvent as E;
    use LifecycleStage as S;

    match (stage, event) {
        (S::Initialized, E::Created) => Some(S::Created),
        (S::Created | S::Stopped, E::Started) => Some(S::Started),
        (S::Started | S::Paused, E::Resumed) => Some(S::Resumed),
        (S::Resumed, E::Paused) => Some(S::Paused),
        (S::Started | S::Paused, E::Stopped) => Some(S::Stopped),
        (S::Created | S::Stopped, E::Destroyed) => Some(S::Destroyed),
        _ => None,
    }
}
