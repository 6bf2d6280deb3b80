use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::Scope;

/// A unit of work: self-contained, argument-free, run exactly once.
pub type Job<'scope> = Box<dyn FnOnce() + Send + 'scope>;

struct JobQueue<'scope> {
    jobs: VecDeque<Job<'scope>>,
    /// Flipped to false on teardown; workers exit once this is false and the
    /// queue is empty
    running: bool,
}

struct Shared<'scope> {
    queue: Mutex<JobQueue<'scope>>,
    job_available: Condvar,
    pending: Mutex<usize>,
    all_done: Condvar,
}

/// A fixed-size pool of long-lived workers draining one shared FIFO queue.
///
/// Workers are spawned on a [`std::thread::Scope`], so jobs may borrow data
/// that outlives the scope - the graph and the shared candidate structures in
/// a K-shortest-paths query. The pool is owned by exactly one query for its
/// full duration.
///
/// Lifecycle: `Running` until the pool is dropped, then `Draining` (no new
/// work, queued jobs finish) until every worker has observed the empty queue
/// and exited; the enclosing scope joins them.
pub struct WorkerPool<'scope> {
    shared: Arc<Shared<'scope>>,
    worker_count: usize,
}

impl<'scope> WorkerPool<'scope> {
    /// Spawns `worker_count` workers on `scope`.
    pub fn new<'env>(scope: &'scope Scope<'scope, 'env>, worker_count: usize) -> Self {
        let shared = Arc::new(Shared {
            queue: Mutex::new(JobQueue {
                jobs: VecDeque::new(),
                running: true,
            }),
            job_available: Condvar::new(),
            pending: Mutex::new(0),
            all_done: Condvar::new(),
        });

        for _ in 0..worker_count {
            let shared = Arc::clone(&shared);
            scope.spawn(move || worker_loop(&shared));
        }

        WorkerPool { shared, worker_count }
    }

    /// Number of workers in the pool
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Appends a job to the queue and wakes one idle worker.
    ///
    /// Non-blocking; callable concurrently from any thread. The pending
    /// counter is raised before the job becomes visible so a fast worker can
    /// never drive it below zero.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'scope,
    {
        {
            let mut pending = self.shared.pending.lock().unwrap();
            *pending += 1;
        }

        {
            let mut queue = self.shared.queue.lock().unwrap();
            queue.jobs.push_back(Box::new(job));
        }

        self.shared.job_available.notify_one();
    }

    /// Blocks until every job enqueued strictly before this call has
    /// completed.
    ///
    /// The caller must not enqueue new work for the current round while
    /// waiting, or completion of the round is ill-defined.
    pub fn wait_idle(&self) {
        let mut pending = self.shared.pending.lock().unwrap();
        while *pending > 0 {
            pending = self.shared.all_done.wait(pending).unwrap();
        }
    }
}

impl<'scope> Drop for WorkerPool<'scope> {
    fn drop(&mut self) {
        {
            let mut queue = self.shared.queue.lock().unwrap();
            queue.running = false;
        }

        self.shared.job_available.notify_all();
    }
}

fn worker_loop(shared: &Shared<'_>) {
    loop {
        let job = {
            let mut queue = shared.queue.lock().unwrap();

            // Block only while running with an empty queue
            while queue.running && queue.jobs.is_empty() {
                queue = shared.job_available.wait(queue).unwrap();
            }

            match queue.jobs.pop_front() {
                Some(job) => job,
                // Draining and empty: time to exit
                None => return,
            }
        };

        job();

        {
            let mut pending = shared.pending.lock().unwrap();
            *pending -= 1;
            if *pending == 0 {
                shared.all_done.notify_all();
            }
        }
    }
}
