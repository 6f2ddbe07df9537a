use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use sigslot::{Connection, DispatchMode, Signal, SignalBuilder, Slot};

/// Emits random unit moves on `moved`.
#[derive(Default)]
struct Mouse {
    moved: Signal<(i32, i32)>,
}

impl Mouse {
    fn on_move(&self, f: impl Fn(&(i32, i32)) + Send + Sync + 'static) -> Connection {
        self.moved.connect(f)
    }

    fn update(&self) -> usize {
        let dx = if rand::random::<bool>() { -1 } else { 1 };
        let dy = if rand::random::<bool>() { -1 } else { 1 };
        self.moved.emit((dx, dy))
    }
}

/// Follows the mouse for as long as it lives.
#[derive(Default)]
struct AutoPlayerController {
    u: Arc<AtomicI32>,
    v: Arc<AtomicI32>,
    move_slot: Slot,
}

impl AutoPlayerController {
    fn activate(&mut self, mouse: &Mouse) {
        let (u, v) = (Arc::clone(&self.u), Arc::clone(&self.v));
        self.move_slot = mouse
            .on_move(move |(x, y)| {
                u.store(*x, Ordering::SeqCst);
                v.store(*y, Ordering::SeqCst);
            })
            .into();
    }

    fn uv(&self) -> (i32, i32) {
        (self.u.load(Ordering::SeqCst), self.v.load(Ordering::SeqCst))
    }
}

fn wait_until(deadline: Duration, mut done: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if done() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    done()
}

#[test]
fn test_slot_raii_while_another_thread_emits() {
    let mouse = Mouse::default();
    let running = AtomicBool::new(true);

    thread::scope(|scope| {
        let emitter = scope.spawn(|| {
            let mut emitted = 0usize;
            while running.load(Ordering::SeqCst) {
                mouse.update();
                emitted += 1;
            }
            emitted
        });

        {
            let mut ctrl = AutoPlayerController::default();
            ctrl.activate(&mouse);
            assert!(wait_until(Duration::from_secs(5), || {
                let (u, v) = ctrl.uv();
                u != 0 && v != 0
            }));
            // no explicit deactivate, the slot does it
        }

        assert_eq!(mouse.moved.observer_count(), 0);
        thread::sleep(Duration::from_millis(5));

        running.store(false, Ordering::SeqCst);
        assert!(emitter.join().unwrap() > 0);
    });

    assert_eq!(mouse.update(), 0);
}

#[test]
fn test_slot_outlives_signal_across_threads() {
    let sig: Signal<u32> = Signal::new();
    let mut slot = Slot::from(sig.connect(|_| {}));

    let handle = thread::spawn(move || {
        drop(sig);
    });
    handle.join().unwrap();

    assert!(!slot.is_connected());
    slot.disconnect();
}

#[test]
fn test_connections_disconnected_from_other_threads() {
    let sig: Signal<usize> = Signal::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let conns: Vec<Connection> = (0..16)
        .map(|_| {
            let h = Arc::clone(&hits);
            sig.connect(move |n| {
                h.fetch_add(*n, Ordering::SeqCst);
            })
        })
        .collect();
    assert_eq!(sig.emit(1), 16);

    thread::scope(|scope| {
        for mut conn in conns {
            scope.spawn(move || conn.disconnect());
        }
    });

    assert_eq!(sig.emit(1), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 16);
}

#[test]
fn test_snapshot_signal_tolerates_reentrant_emit() {
    let sig: Arc<Signal<u32>> = Arc::new(
        SignalBuilder::new()
            .name("reentrant")
            .dispatch(DispatchMode::Snapshot)
            .build(),
    );
    let depth = Arc::new(AtomicUsize::new(0));

    let weak = Arc::downgrade(&sig);
    let d = Arc::clone(&depth);
    let _slot = sig
        .connect(move |n| {
            d.fetch_add(1, Ordering::SeqCst);
            if *n > 0
                && let Some(sig) = weak.upgrade()
            {
                sig.emit(n - 1);
            }
        })
        .scoped();

    assert_eq!(sig.emit(3), 1);
    assert_eq!(depth.load(Ordering::SeqCst), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_emit_from_tokio_tasks() {
    let sig = Arc::new(Signal::<u64>::new());
    let total = Arc::new(AtomicUsize::new(0));

    let t = Arc::clone(&total);
    let _slot = sig
        .connect(move |n| {
            t.fetch_add(*n as usize, Ordering::SeqCst);
        })
        .scoped();

    let mut tasks = Vec::new();
    for i in 1..=8u64 {
        let sig = Arc::clone(&sig);
        tasks.push(tokio::spawn(async move { sig.emit(i) }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 1);
    }

    assert_eq!(total.load(Ordering::SeqCst), 36);
}
