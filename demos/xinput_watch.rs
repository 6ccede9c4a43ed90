//! Live watch over real XInput slots (Windows only).
//!
//! Ticks the arbiter at ~60Hz, prints events and a state line whenever the
//! active pad's input changes. Plug/unplug controllers and press buttons to
//! watch arbitration happen.

#[cfg(all(target_os = "windows", feature = "xinput"))]
fn main() {
    use std::time::Duration;

    use padpick::{ArbiterConfig, EventFilter, PadArbiter, PadEvent, PadEventListener};

    struct PrintEvents;

    impl PadEventListener for PrintEvents {
        fn on_event(&mut self, event: &PadEvent) {
            println!("{event:?}");
        }
    }

    env_logger::init();

    let config = ArbiterConfig {
        scan_width: 4,
        ..Default::default()
    };
    let mut arbiter = PadArbiter::with_default_driver(config).expect("bundled XInput backend");
    arbiter.events().add_listener(PrintEvents, EventFilter::All);
    arbiter.set_auto_switch(true);

    println!(
        "watching XInput slots 0..4, starting on index {}; Ctrl-C to quit",
        arbiter.selected_index()
    );

    let mut last_line = String::new();
    loop {
        arbiter.tick(Duration::from_millis(16));

        if arbiter.is_connected() {
            let pad = arbiter.current_gamepad();
            let pressed: Vec<_> = pad.buttons.iter().collect();
            let line = format!(
                "[{}] buttons={pressed:?} L=({:.2},{:.2}) R=({:.2},{:.2}) LT={:.2} RT={:.2}",
                arbiter.selected_index(),
                pad.left_stick.x,
                pad.left_stick.y,
                pad.right_stick.x,
                pad.right_stick.y,
                pad.left_trigger,
                pad.right_trigger,
            );
            if line != last_line {
                println!("{line}");
                last_line = line;
            }
        }

        std::thread::sleep(Duration::from_millis(16));
    }
}

#[cfg(not(all(target_os = "windows", feature = "xinput")))]
fn main() {
    eprintln!("xinput_watch needs Windows with the `xinput` feature enabled");
}
