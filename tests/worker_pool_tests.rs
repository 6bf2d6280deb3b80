use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use yen_ksp::data_structures::WorkerPool;

#[test]
fn wait_idle_observes_every_enqueued_job() {
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 4);

        for _ in 0..100 {
            let counter = &counter;
            pool.execute(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        pool.wait_idle();
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    });
}

#[test]
fn pool_is_reusable_across_rounds() {
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 2);

        for round in 1..=5 {
            for _ in 0..20 {
                let counter = &counter;
                pool.execute(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            }

            pool.wait_idle();
            assert_eq!(counter.load(Ordering::SeqCst), round * 20);
        }
    });
}

#[test]
fn wait_idle_blocks_until_slow_jobs_finish() {
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 3);

        for _ in 0..6 {
            let counter = &counter;
            pool.execute(move || {
                thread::sleep(Duration::from_millis(20));
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        pool.wait_idle();
        assert_eq!(counter.load(Ordering::SeqCst), 6);
    });
}

#[test]
fn enqueue_is_safe_from_multiple_threads() {
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 4);
        let pool = &pool;
        let counter = &counter;

        thread::scope(|producers| {
            for _ in 0..4 {
                producers.spawn(move || {
                    for _ in 0..50 {
                        pool.execute(move || {
                            counter.fetch_add(1, Ordering::SeqCst);
                        });
                    }
                });
            }
        });

        pool.wait_idle();
        assert_eq!(counter.load(Ordering::SeqCst), 200);
    });
}

#[test]
fn wait_idle_with_no_work_returns_immediately() {
    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 2);
        pool.wait_idle();
        assert_eq!(pool.worker_count(), 2);
    });
}

#[test]
fn teardown_drains_outstanding_jobs() {
    let counter = AtomicUsize::new(0);

    thread::scope(|scope| {
        let pool = WorkerPool::new(scope, 2);

        for _ in 0..10 {
            let counter = &counter;
            pool.execute(move || {
                thread::sleep(Duration::from_millis(5));
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        // Dropped without wait_idle: workers drain and the scope joins them
        drop(pool);
    });

    assert_eq!(counter.load(Ordering::SeqCst), 10);
}
