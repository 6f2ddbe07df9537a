//! # Example: mouse
//!
//! A mouse emits moves from a background thread while a controller follows it.
//! The controller owns a [`Slot`], so dropping it detaches the observer without any
//! explicit cleanup, even while the other thread keeps emitting.
//!
//! Demonstrates how to:
//! - Expose a [`Signal`] as a field of a type.
//! - Keep an observer alive exactly as long as its owner with a [`Slot`].
//! - Emit from one thread while another connects and drops.
//!
//! ## Flow
//! ```text
//! emitter thread ──► Mouse::update() ──► moved.emit((dx, dy))
//!                                            └─► Controller observer (while attached)
//! main thread    ──► Controller::attach(&mouse)
//!                ──► wait for first move
//!                ──► drop(controller) ──► Slot disconnects
//!                ──► stop emitter
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example mouse
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use sigslot::{Signal, SignalBuilder, Slot};

struct Mouse {
    moved: Signal<(i32, i32)>,
}

impl Mouse {
    fn new() -> Self {
        Self {
            moved: SignalBuilder::new().name("mouse_moved").build(),
        }
    }

    fn update(&self) -> usize {
        let dx = if rand::random::<bool>() { -1 } else { 1 };
        let dy = if rand::random::<bool>() { -1 } else { 1 };
        self.moved.emit((dx, dy))
    }
}

struct Controller {
    u: Arc<AtomicI32>,
    v: Arc<AtomicI32>,
    _on_move: Slot,
}

impl Controller {
    fn attach(mouse: &Mouse) -> Self {
        let u = Arc::new(AtomicI32::new(0));
        let v = Arc::new(AtomicI32::new(0));
        let (tu, tv) = (Arc::clone(&u), Arc::clone(&v));
        let slot = mouse
            .moved
            .connect(move |(x, y)| {
                tu.store(*x, Ordering::Relaxed);
                tv.store(*y, Ordering::Relaxed);
            })
            .scoped();
        Self {
            u,
            v,
            _on_move: slot,
        }
    }

    fn uv(&self) -> (i32, i32) {
        (self.u.load(Ordering::Relaxed), self.v.load(Ordering::Relaxed))
    }
}

fn main() {
    let mouse = Mouse::new();
    let running = AtomicBool::new(true);
    let delivered = AtomicUsize::new(0);

    thread::scope(|scope| {
        // 1. Emit moves until told to stop
        scope.spawn(|| {
            while running.load(Ordering::Relaxed) {
                delivered.fetch_add(mouse.update(), Ordering::Relaxed);
                thread::sleep(Duration::from_millis(1));
            }
        });

        // 2. Attach a controller and let it follow a few moves
        {
            let ctrl = Controller::attach(&mouse);
            println!("[main] controller attached, observers={}", mouse.moved.observer_count());
            thread::sleep(Duration::from_millis(20));
            let (u, v) = ctrl.uv();
            println!("[main] controller sees last move ({u}, {v})");
        } // 3. Controller dropped: its slot disconnects

        println!("[main] controller dropped, observers={}", mouse.moved.observer_count());
        thread::sleep(Duration::from_millis(5));
        running.store(false, Ordering::Relaxed);
    });

    println!(
        "[main] moves delivered: {}, after teardown: {}",
        delivered.load(Ordering::Relaxed),
        mouse.update()
    );
}
