//! Scripted walkthrough of the arbiter over the virtual backend.
//!
//! Plays a plug/unplug/touch sequence and prints every event the arbiter
//! publishes. Run with `RUST_LOG=debug` to also see the arbiter's own log
//! lines.

use std::time::Duration;

use padpick::backends::virtual_pad::VirtualDriver;
use padpick::{ArbiterConfig, EventFilter, PadArbiter, PadButton, PadEvent, PadEventListener};

struct PrintEvents;

impl PadEventListener for PrintEvents {
    fn on_event(&mut self, event: &PadEvent) {
        match event {
            PadEvent::Connected(i) => println!("  -> connected on index {i}"),
            PadEvent::Disconnected(i) => println!("  -> disconnected on index {i}"),
            PadEvent::SelectionChanged(i) => println!("  -> selection moved to index {i}"),
        }
    }
}

fn run_ticks(arbiter: &mut PadArbiter, count: usize) {
    for _ in 0..count {
        arbiter.tick(Duration::from_millis(16));
    }
}

fn main() {
    env_logger::init();

    let control = VirtualDriver::new();
    let config = ArbiterConfig {
        scan_width: 4,
        rescan_interval_ms: 500,
        ..Default::default()
    };
    let mut arbiter = PadArbiter::new(Box::new(control.clone()), config);
    arbiter.events().add_listener(PrintEvents, EventFilter::All);

    println!("started on index {}", arbiter.selected_index());

    println!("plugging a gamepad into slot 0...");
    control.update_slot(0, |s| {
        s.connect_gamepad();
        s.gamepad_name = Some("Demo Pad".into());
    });
    run_ticks(&mut arbiter, 2);
    println!("active: {} ({})", arbiter.selected_index(), arbiter.device_name(0));

    println!("unplugging slot 0, plugging a joystick into slot 2...");
    control.update_slot(0, |s| {
        s.disconnect();
    });
    control.update_slot(2, |s| {
        s.connect_joystick(8, 4, 1);
        s.joystick_name = Some("Demo Stick".into());
    });
    // Enough ticks for the rescan window to recover onto slot 2.
    run_ticks(&mut arbiter, 40);

    println!("enabling auto-switch and pressing A on a pad in slot 1...");
    control.update_slot(1, |s| {
        s.connect_gamepad().press(PadButton::A);
    });
    arbiter.set_auto_switch(true);
    run_ticks(&mut arbiter, 2);

    println!("rumble test on the active pad (300ms)...");
    arbiter.trigger_rumble(0.75, 0.25, Duration::from_millis(300));
    println!("  motors now: {:?}", control.slot(arbiter.selected_index()).motors);
    run_ticks(&mut arbiter, 25);
    println!("  motors after zero-out: {:?}", control.slot(arbiter.selected_index()).motors);

    let connected: Vec<usize> = arbiter.connected_devices().collect();
    println!("connected indices: {connected:?}");
    for index in connected {
        println!("  [{index}] {}", arbiter.device_name(index));
    }
}
