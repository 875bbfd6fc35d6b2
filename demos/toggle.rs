//! Two-state toggle with a shared counting context
//!
//! Actions mutate a context value through interior mutability; the context
//! itself is opaque to the core.
//!
//! Run with: cargo run --example toggle

use machina::{id_enum, Service, State, Transition};
use std::sync::atomic::{AtomicU64, Ordering};

id_enum! {
    enum Switch {
        Inactive,
        Active,
    }
}

id_enum! {
    enum Input {
        Init,
        Toggle,
    }
}

struct Counters {
    activations: AtomicU64,
}

fn main() {
    env_logger::init();

    let mut service = Service::<Switch, Input, Counters>::with_definition(
        Switch::Inactive,
        vec![
            State::new(Switch::Inactive).on(Input::Toggle, Transition::to(Switch::Active)),
            State::new(Switch::Active)
                .on(Input::Toggle, Transition::to(Switch::Inactive))
                .on_enter(machina::Action::new(|_, context: Option<&Counters>| {
                    if let Some(counters) = context {
                        counters.activations.fetch_add(1, Ordering::SeqCst);
                    }
                })),
        ],
        Some(Counters {
            activations: AtomicU64::new(0),
        }),
    )
    .expect("valid machine definition");

    service.start(&Input::Init);
    for _ in 0..5 {
        service.send(&Input::Toggle);
    }

    service.subscribe(|result| {
        let activations = result
            .context
            .as_deref()
            .map(|c| c.activations.load(Ordering::SeqCst))
            .unwrap_or(0);
        println!(
            "state: {:?}, activations so far: {}",
            result.state.id(),
            activations
        );
    });
    service.stop();
}
