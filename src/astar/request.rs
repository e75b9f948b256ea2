//! # Path Requests
//!
//! A [`PathRequest`] describes one search: endpoints, priority, and whether
//! the result should be collapsed to its turning points. Submitted requests
//! resolve through a [`PathTicket`], which can be polled from a game loop or
//! waited on from a worker.

use crate::astar::SearchArea;
use crate::utility::GridPoint;
use std::sync::{Arc, Condvar, Mutex};

/// The outcome of a path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    found: bool,
    path: Vec<GridPoint>,
}

impl PathResult {
    /// A successful result. The path runs start to target, excluding the
    /// start cell.
    pub fn found(path: Vec<GridPoint>) -> Self {
        Self { found: true, path }
    }

    /// The no-path result.
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
        }
    }

    /// True if a path was found.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Waypoints from start to target, excluding the start cell.
    pub fn path(&self) -> &[GridPoint] {
        &self.path
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True when the result carries no waypoints.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// A single pathfinding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRequest {
    start: GridPoint,
    stop: GridPoint,
    collapse: bool,
    priority: i32,
}

impl PathRequest {
    /// Creates a request from `start` to `stop` with path collapsing
    /// enabled and default priority 0.
    pub fn new(start: GridPoint, stop: GridPoint) -> Self {
        Self {
            start,
            stop,
            collapse: true,
            priority: 0,
        }
    }

    /// Toggles collapsing of collinear waypoints.
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    /// Sets the service priority. Lower values are served first.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// The start cell.
    pub fn start(&self) -> GridPoint {
        self.start
    }

    /// The target cell.
    pub fn stop(&self) -> GridPoint {
        self.stop
    }

    /// True when collinear waypoints are merged.
    pub fn collapse(&self) -> bool {
        self.collapse
    }

    /// The service priority; lower is served first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Resolves trivial requests without searching.
    ///
    /// Returns `Some` when either endpoint is untraversable (no path) or
    /// when the endpoints coincide (the single-point path).
    pub fn prevalidate<A: SearchArea + ?Sized>(&self, area: &A) -> Option<PathResult> {
        if !area.traversable(self.start.x, self.start.y)
            || !area.traversable(self.stop.x, self.stop.y)
        {
            return Some(PathResult::not_found());
        }
        if self.start == self.stop {
            return Some(PathResult::found(vec![self.stop]));
        }
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct TicketState {
    result: Mutex<Option<PathResult>>,
    resolved: Condvar,
}

impl TicketState {
    pub(crate) fn resolve(&self, result: PathResult) {
        let mut slot = self.result.lock().expect("ticket lock poisoned");
        *slot = Some(result);
        self.resolved.notify_all();
    }
}

/// Handle to a submitted request.
///
/// Game loops call [`PathTicket::poll`] once per tick; worker code may
/// block on [`PathTicket::wait`] instead.
#[derive(Debug, Clone)]
pub struct PathTicket {
    pub(crate) state: Arc<TicketState>,
}

impl PathTicket {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(TicketState::default()),
        }
    }

    /// Returns the result if the search has finished, without blocking.
    pub fn poll(&self) -> Option<PathResult> {
        self.state
            .result
            .lock()
            .expect("ticket lock poisoned")
            .clone()
    }

    /// True once the search has finished.
    pub fn is_resolved(&self) -> bool {
        self.state
            .result
            .lock()
            .expect("ticket lock poisoned")
            .is_some()
    }

    /// Blocks until the search finishes and returns the result.
    pub fn wait(&self) -> PathResult {
        let mut slot = self.state.result.lock().expect("ticket lock poisoned");
        loop {
            if let Some(result) = slot.clone() {
                return result;
            }
            slot = self
                .state
                .resolved
                .wait(slot)
                .expect("ticket lock poisoned");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OpenField;

    impl SearchArea for OpenField {
        fn traversable(&self, x: i32, y: i32) -> bool {
            (0..8).contains(&x) && (0..8).contains(&y)
        }

        fn area_size(&self) -> usize {
            64
        }
    }

    #[test]
    fn prevalidate_rejects_blocked_endpoints() {
        let request = PathRequest::new(GridPoint::new(-1, 0), GridPoint::new(3, 3));
        let result = request.prevalidate(&OpenField).expect("should resolve");
        assert!(!result.is_found());

        let request = PathRequest::new(GridPoint::new(0, 0), GridPoint::new(8, 8));
        let result = request.prevalidate(&OpenField).expect("should resolve");
        assert!(!result.is_found());
    }

    #[test]
    fn prevalidate_short_circuits_degenerate_path() {
        let p = GridPoint::new(4, 4);
        let request = PathRequest::new(p, p);
        let result = request.prevalidate(&OpenField).expect("should resolve");
        assert!(result.is_found());
        assert_eq!(result.path(), &[p]);
    }

    #[test]
    fn prevalidate_passes_real_requests_through() {
        let request = PathRequest::new(GridPoint::new(0, 0), GridPoint::new(7, 7));
        assert!(request.prevalidate(&OpenField).is_none());
    }

    #[test]
    fn ticket_polls_and_waits() {
        let ticket = PathTicket::new();
        assert!(!ticket.is_resolved());
        assert!(ticket.poll().is_none());
        ticket.state.resolve(PathResult::not_found());
        assert!(ticket.is_resolved());
        assert_eq!(ticket.wait(), PathResult::not_found());
    }
}
