//! Asynchronous action dispatch through an external work queue
//!
//! The core never manages threads; this demo supplies a queue backed by a
//! worker thread and a channel. Queue-tagged actions are handed off and
//! the interpreter moves on without waiting for them.
//!
//! Run with: cargo run --example worker_queue

use machina::{id_enum, Action, Job, Service, State, Transition, WorkQueue};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

id_enum! {
    enum Upload {
        Idle,
        InFlight,
    }
}

id_enum! {
    enum Command {
        Init,
        Begin,
    }
}

/// Work queue backed by a single worker thread.
struct WorkerThread {
    label: String,
    sender: Mutex<mpsc::Sender<Job>>,
}

impl WorkerThread {
    fn spawn(label: &str) -> Arc<Self> {
        let (sender, receiver) = mpsc::channel::<Job>();
        thread::spawn(move || {
            for job in receiver {
                job();
            }
        });

        Arc::new(Self {
            label: label.to_string(),
            sender: Mutex::new(sender),
        })
    }
}

impl WorkQueue for WorkerThread {
    fn label(&self) -> &str {
        &self.label
    }

    fn submit(&self, job: Job) {
        // A closed channel means the worker is gone; the job is dropped,
        // which is within the no-completion-guarantee contract.
        let _ = self.sender.lock().unwrap().send(job);
    }
}

fn main() {
    env_logger::init();

    let queue: Arc<dyn WorkQueue> = WorkerThread::spawn("uploads");

    let mut service = Service::<Upload, Command, ()>::with_definition(
        Upload::Idle,
        vec![
            State::new(Upload::Idle).on(
                Command::Begin,
                Transition::to(Upload::InFlight).action(Action::on_queue(queue, |event, _| {
                    println!("worker: handling {:?} off the caller's thread", event);
                    thread::sleep(Duration::from_millis(100));
                    println!("worker: done");
                })),
            ),
            State::new(Upload::InFlight),
        ],
        None,
    )
    .expect("valid machine definition");

    service.subscribe(|result| {
        println!("main: now in {:?}", result.state.id());
    });

    service.start(&Command::Init);
    service.send(&Command::Begin);
    println!("main: send returned before the worker finished");

    // Give the worker a moment before the process exits.
    thread::sleep(Duration::from_millis(300));
    service.stop();
}
