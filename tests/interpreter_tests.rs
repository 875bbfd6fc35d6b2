//! End-to-end scenarios for the interpreter.

use machina::{id_enum, Action, Job, Machine, Service, State, Transition, WorkQueue};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

id_enum! {
    enum Light {
        Green,
        Yellow,
        Red,
    }
}

id_enum! {
    enum Signal {
        Init,
        Timer,
    }
}

fn traffic_service() -> Service<Light, Signal, ()> {
    let machine = Machine::<Light, Signal, ()>::new(
        Light::Green,
        vec![
            State::new(Light::Green).on(Signal::Timer, Transition::to(Light::Yellow)),
            State::new(Light::Yellow).on(Signal::Timer, Transition::to(Light::Red)),
            State::new(Light::Red).on(Signal::Timer, Transition::to(Light::Green)),
        ],
        None,
    )
    .unwrap();

    Service::new(Arc::new(machine))
}

#[test]
fn traffic_light_cycles_through_three_states() {
    let mut service = traffic_service();
    assert_eq!(service.state().id(), &Light::Green);

    service.start(&Signal::Init);
    assert_eq!(service.state().id(), &Light::Green);

    service.send(&Signal::Timer);
    assert_eq!(service.state().id(), &Light::Yellow);

    service.send(&Signal::Timer);
    assert_eq!(service.state().id(), &Light::Red);

    service.send(&Signal::Timer);
    assert_eq!(service.state().id(), &Light::Green);
}

#[test]
fn every_cycle_step_reports_changed() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);

    let mut service = traffic_service();
    service.start(&Signal::Init);
    service.subscribe(move |result| sink.lock().unwrap().push((*result.state.id(), result.changed)));

    service.send(&Signal::Timer);
    service.send(&Signal::Timer);
    service.send(&Signal::Timer);

    assert_eq!(
        *changes.lock().unwrap(),
        vec![
            (Light::Green, false), // replay on subscribe
            (Light::Yellow, true),
            (Light::Red, true),
            (Light::Green, true),
        ]
    );
}

id_enum! {
    enum ToggleState {
        Inactive,
        Active,
    }
}

id_enum! {
    enum ToggleEvent {
        Init,
        Toggle,
    }
}

#[test]
fn toggle_alternates_indefinitely() {
    let mut service = Service::<ToggleState, ToggleEvent, ()>::with_definition(
        ToggleState::Inactive,
        vec![
            State::new(ToggleState::Inactive)
                .on(ToggleEvent::Toggle, Transition::to(ToggleState::Active)),
            State::new(ToggleState::Active)
                .on(ToggleEvent::Toggle, Transition::to(ToggleState::Inactive)),
        ],
        None,
    )
    .unwrap();

    service.start(&ToggleEvent::Init);
    assert_eq!(service.state().id(), &ToggleState::Inactive);

    for round in 0..10 {
        service.send(&ToggleEvent::Toggle);
        let expected = if round % 2 == 0 {
            ToggleState::Active
        } else {
            ToggleState::Inactive
        };
        assert_eq!(service.state().id(), &expected);
    }
}

id_enum! {
    enum TimerState {
        Idle,
        Running,
        Paused,
    }
}

id_enum! {
    enum TimerEvent {
        Init,
        Start,
        Pause,
        Reset,
    }
}

struct TimerContext {
    ticks: Mutex<u64>,
}

fn timer_service() -> Service<TimerState, TimerEvent, TimerContext> {
    Service::with_definition(
        TimerState::Idle,
        vec![
            State::new(TimerState::Idle)
                .on(TimerEvent::Start, Transition::to(TimerState::Running))
                .on_enter(Action::new(|_, context: Option<&TimerContext>| {
                    if let Some(context) = context {
                        *context.ticks.lock().unwrap() = 0;
                    }
                })),
            State::new(TimerState::Running)
                .on(TimerEvent::Pause, Transition::to(TimerState::Paused))
                .on_enter(Action::new(|_, context: Option<&TimerContext>| {
                    if let Some(context) = context {
                        *context.ticks.lock().unwrap() += 1;
                    }
                })),
            State::new(TimerState::Paused)
                .on(TimerEvent::Reset, Transition::to(TimerState::Idle))
                .on(TimerEvent::Start, Transition::to(TimerState::Running)),
        ],
        Some(TimerContext {
            ticks: Mutex::new(0),
        }),
    )
    .unwrap()
}

#[test]
fn actions_mutate_the_shared_context_across_the_lifecycle() {
    let mut service = timer_service();
    service.start(&TimerEvent::Init);

    service.send(&TimerEvent::Start);
    service.send(&TimerEvent::Pause);
    service.send(&TimerEvent::Start);
    assert_eq!(service.state().id(), &TimerState::Running);

    let observed = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&observed);
    service.subscribe(move |result| {
        if let Some(context) = result.context.as_deref() {
            *sink.lock().unwrap() = *context.ticks.lock().unwrap();
        }
    });

    // Entered Running twice since the last reset-to-Idle.
    assert_eq!(*observed.lock().unwrap(), 2);

    service.send(&TimerEvent::Pause);
    service.send(&TimerEvent::Reset);
    assert_eq!(service.state().id(), &TimerState::Idle);

    // Idle's enter action reset the tick counter.
    assert_eq!(*observed.lock().unwrap(), 0);
}

id_enum! {
    enum Review {
        Draft,
        Submitted,
        Approved,
    }
}

id_enum! {
    enum ReviewEvent {
        Init,
        Submit,
    }
}

#[test]
fn guarded_alternatives_pick_the_first_passing_candidate() {
    struct ReviewContext {
        trusted: bool,
    }

    // Trusted authors skip the Submitted stage entirely.
    let states = |_| {
        vec![
            State::new(Review::Draft)
                .on(
                    ReviewEvent::Submit,
                    Transition::to(Review::Approved)
                        .when(|_, context: Option<&ReviewContext>| {
                            context.is_some_and(|c| c.trusted)
                        }),
                )
                .on(ReviewEvent::Submit, Transition::to(Review::Submitted)),
            State::new(Review::Submitted),
            State::new(Review::Approved),
        ]
    };

    let mut trusted = Service::with_definition(
        Review::Draft,
        states(()),
        Some(ReviewContext { trusted: true }),
    )
    .unwrap();
    trusted.start(&ReviewEvent::Init);
    trusted.send(&ReviewEvent::Submit);
    assert_eq!(trusted.state().id(), &Review::Approved);

    let mut untrusted = Service::with_definition(
        Review::Draft,
        states(()),
        Some(ReviewContext { trusted: false }),
    )
    .unwrap();
    untrusted.start(&ReviewEvent::Init);
    untrusted.send(&ReviewEvent::Submit);
    assert_eq!(untrusted.state().id(), &Review::Submitted);
}

#[test]
fn can_reports_registered_events_only() {
    let service = traffic_service();

    assert!(service.state().can(&Signal::Timer));
    assert!(!service.state().can(&Signal::Init));
}

/// Work queue backed by a tokio runtime's blocking pool.
struct RuntimeQueue {
    handle: tokio::runtime::Handle,
}

impl WorkQueue for RuntimeQueue {
    fn label(&self) -> &str {
        "tokio-blocking"
    }

    fn submit(&self, job: Job) {
        self.handle.spawn_blocking(job);
    }
}

#[test]
fn queued_actions_run_on_the_supplied_runtime() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let queue: Arc<dyn WorkQueue> = Arc::new(RuntimeQueue {
        handle: runtime.handle().clone(),
    });

    let (tx, rx) = mpsc::channel();
    let sender = Mutex::new(tx);

    let mut service = Service::<ToggleState, ToggleEvent, ()>::with_definition(
        ToggleState::Inactive,
        vec![
            State::new(ToggleState::Inactive).on(
                ToggleEvent::Toggle,
                Transition::to(ToggleState::Active).action(Action::on_queue(
                    queue,
                    move |event, _| {
                        sender.lock().unwrap().send(*event).unwrap();
                    },
                )),
            ),
            State::new(ToggleState::Active),
        ],
        None,
    )
    .unwrap();

    service.start(&ToggleEvent::Init);
    service.send(&ToggleEvent::Toggle);

    // send() returned without waiting; the job lands on the runtime.
    let delivered = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(delivered, ToggleEvent::Toggle);
    assert_eq!(service.state().id(), &ToggleState::Active);
}
