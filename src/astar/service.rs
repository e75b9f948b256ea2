//! # Request Service
//!
//! A worker pool that serves path requests in priority order. Submitting
//! hands back a [`PathTicket`]; the pool resolves tickets as workers finish
//! searches. Dropping the service shuts the workers down and joins them.

use crate::astar::{search, PathRequest, PathResult, PathTicket, SearchArea};
use crate::config::MAX_PATHFINDER_THREADS;
use crate::utility::GridPoint;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

/// A search area that can be shared with the worker threads.
pub type SharedArea = Arc<dyn SearchArea + Send + Sync>;

struct Job {
    request: PathRequest,
    area: SharedArea,
    ticket: PathTicket,
    seq: u64,
}

// BinaryHeap is a max-heap; invert so the lowest priority value is served
// first, with FIFO order among equal priorities.
impl Ord for Job {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .request
            .priority()
            .cmp(&self.request.priority())
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.request.priority() == other.request.priority() && self.seq == other.seq
    }
}

impl Eq for Job {}

#[derive(Default)]
struct Queue {
    jobs: BinaryHeap<Job>,
    next_seq: u64,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    queue: Mutex<Queue>,
    available: Condvar,
}

/// Threaded pathfinding service.
///
/// Workers pull the highest-priority pending request and run the search.
pub struct RequestService {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl RequestService {
    /// Spawns a service with `threads` workers, clamped to
    /// `1..=MAX_PATHFINDER_THREADS`.
    pub fn new(threads: usize) -> Self {
        let threads = threads.clamp(1, MAX_PATHFINDER_THREADS);
        let shared = Arc::new(Shared::default());
        let workers = (0..threads)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                std::thread::Builder::new()
                    .name(format!("loam-pathfinder-{}", worker))
                    .spawn(move || worker_loop(worker, shared))
                    .expect("failed to spawn pathfinder worker")
            })
            .collect();
        debug!("pathfinding service started with {} workers", threads);
        Self { shared, workers }
    }

    /// Queues a request against `area` and returns its ticket.
    ///
    /// Trivial requests (blocked or coinciding endpoints) resolve
    /// immediately without touching the queue.
    pub fn submit(&self, request: PathRequest, area: SharedArea) -> PathTicket {
        let ticket = PathTicket::new();
        if let Some(result) = request.prevalidate(area.as_ref()) {
            ticket.state.resolve(result);
            return ticket;
        }
        let mut queue = self.shared.queue.lock().expect("service lock poisoned");
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.jobs.push(Job {
            request,
            area,
            ticket: ticket.clone(),
            seq,
        });
        drop(queue);
        self.shared.available.notify_one();
        ticket
    }

    /// Convenience wrapper over [`RequestService::submit`] for plain
    /// coordinates.
    pub fn submit_points(
        &self,
        start: GridPoint,
        stop: GridPoint,
        area: SharedArea,
    ) -> PathTicket {
        self.submit(PathRequest::new(start, stop), area)
    }

    /// Runs a search synchronously on the calling thread.
    pub fn handle_direct<A: SearchArea + ?Sized>(request: &PathRequest, area: &A) -> PathResult {
        search(area, request)
    }

    /// Number of requests waiting in the queue.
    pub fn pending(&self) -> usize {
        self.shared
            .queue
            .lock()
            .expect("service lock poisoned")
            .jobs
            .len()
    }
}

impl Drop for RequestService {
    fn drop(&mut self) {
        {
            let mut queue = self.shared.queue.lock().expect("service lock poisoned");
            queue.shutdown = true;
        }
        self.shared.available.notify_all();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
        debug!("pathfinding service stopped");
    }
}

fn worker_loop(worker: usize, shared: Arc<Shared>) {
    loop {
        let job = {
            let mut queue = shared.queue.lock().expect("service lock poisoned");
            loop {
                if let Some(job) = queue.jobs.pop() {
                    break job;
                }
                if queue.shutdown {
                    return;
                }
                queue = shared
                    .available
                    .wait(queue)
                    .expect("service lock poisoned");
            }
        };
        trace!(
            "worker {} searching {} -> {}",
            worker,
            job.request.start(),
            job.request.stop()
        );
        let result = search(job.area.as_ref(), &job.request);
        job.ticket.state.resolve(result);
    }
}
