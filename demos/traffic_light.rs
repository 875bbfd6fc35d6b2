//! Traffic light interpreter
//!
//! A three-state cycle driven by a single timer event, with a subscriber
//! printing every transition result.
//!
//! Run with: cargo run --example traffic_light

use machina::{id_enum, Machine, Service, State, Transition};
use std::sync::Arc;

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

fn main() {
    env_logger::init();

    let machine = Machine::<Light, Signal, ()>::new(
        Light::Green,
        vec![
            State::new(Light::Green).on(Signal::Timer, Transition::to(Light::Yellow)),
            State::new(Light::Yellow).on(Signal::Timer, Transition::to(Light::Red)),
            State::new(Light::Red).on(Signal::Timer, Transition::to(Light::Green)),
        ],
        None,
    )
    .expect("valid machine definition");

    let mut service = Service::new(Arc::new(machine));
    service.subscribe(|result| {
        println!("-> {:?} (changed: {})", result.state.id(), result.changed);
    });

    service.start(&Signal::Init);
    for _ in 0..6 {
        service.send(&Signal::Timer);
    }
    service.stop();
}
