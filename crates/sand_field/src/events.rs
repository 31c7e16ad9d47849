//! Event types and sinks for observing field mutations.
//!
//! [`FieldEvent`]s are emitted by
//! [`crate::field::DisplacementField::apply_stroke_with_events`] and
//! [`crate::field::DisplacementField::reset_with_events`].
use crate::stroke::StrokeReport;

/// Describes a mutation (or ignored mutation) of the field.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum FieldEvent {
    /// A stroke was rasterized.
    StrokeApplied {
        /// Number of points in the stroke.
        point_count: usize,
        /// Disc radius used, in cells.
        radius_cells: i32,
        /// What the stroke changed.
        report: StrokeReport,
    },

    /// A stroke with fewer than two points was dropped.
    StrokeIgnored {
        /// Number of points supplied.
        point_count: usize,
    },

    /// The field was restored to its neutral value.
    Reset {
        resolution: usize,
        neutral_value: f32,
    },
}

/// A generic event sink that accepts [`FieldEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: FieldEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: FieldEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(FieldEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(FieldEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(FieldEvent),
{
    #[inline]
    fn send(&mut self, event: FieldEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<FieldEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<FieldEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[FieldEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: FieldEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_event() -> FieldEvent {
        FieldEvent::Reset {
            resolution: 4,
            neutral_value: 1.0,
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(reset_event());
        sink.send(FieldEvent::StrokeIgnored { point_count: 0 });
        assert_eq!(sink.len(), 2);
        assert!(matches!(sink.as_slice()[1], FieldEvent::StrokeIgnored { .. }));
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(reset_event());
        assert_eq!(multi.len(), 2);
        assert!(multi.sinks().iter().all(|s| s.len() == 1));

        let mut empty: MultiSink<VecSink> = MultiSink::default();
        empty.send(reset_event());
        assert!(empty.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(reset_event());
        sink.send(reset_event());
        assert_eq!(count, 2);
    }
}
