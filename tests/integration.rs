//! Integration tests for rgb-knob host-testable logic.
//!
//! Drives `KnobController` against the real `LightState` host through a
//! fake adapter fed from raw status-register bytes, the way the chip
//! adapter decodes them on target.

use heapless::{Deque, Vec};
use rgb_knob::registers::status;
use rgb_knob::{
    DriverAdapter, EncoderEvent, KnobConfig, KnobController, LightState, LightingHost,
    NotifyReason, OperatingMode, Preset, Rgb,
};

const BLUE: Rgb = Rgb::from_u32(0x0000FF);
const RED: Rgb = Rgb::from_u32(0xFF0000);

/// Adapter fed with raw status bytes, one per poll.
#[derive(Default)]
struct StatusBusAdapter {
    status: Deque<u8, 16>,
    colors: Vec<Rgb, 16>,
}

impl StatusBusAdapter {
    fn latch(&mut self, bits: u8) {
        self.status.push_back(bits).expect("status queue full");
    }
}

impl DriverAdapter for StatusBusAdapter {
    fn poll_pending_event(&mut self) -> Option<EncoderEvent> {
        self.status.pop_front().and_then(EncoderEvent::from_status)
    }

    fn set_indicator_color(&mut self, color: Rgb) {
        self.colors.push(color).expect("color log full");
    }
}

fn setup(effect_count: u8) -> (KnobController, StatusBusAdapter, LightState) {
    let mut knob = KnobController::new(KnobConfig::default(), 0);
    let mut adapter = StatusBusAdapter::default();
    let mut light = LightState::with_effect_count(effect_count);
    light
        .save_preset(Preset::new(1, 160, 3))
        .expect("preset table has room");
    knob.begin(&mut adapter);
    (knob, adapter, light)
}

#[test]
fn turn_dims_and_brightens_through_status_bytes() {
    let (mut knob, mut adapter, mut light) = setup(20);
    light.set_brightness(100);

    adapter.latch(status::RINC);
    knob.tick(5, &mut adapter, &mut light);
    assert_eq!(light.brightness(), 116);
    assert_eq!(light.take_change(), Some(NotifyReason::Button));

    adapter.latch(status::RDEC);
    knob.tick(10, &mut adapter, &mut light);
    adapter.latch(status::RDEC);
    knob.tick(15, &mut adapter, &mut light);
    assert_eq!(light.brightness(), 84);
    assert_eq!(knob.mode(), OperatingMode::Brightness);
}

#[test]
fn counter_limit_flags_alone_do_not_count_as_interaction() {
    let (mut knob, mut adapter, mut light) = setup(20);

    adapter.latch(status::RMAX);
    knob.tick(500, &mut adapter, &mut light);
    assert_eq!(knob.last_interaction_ms(), 0);
    assert_eq!(light.take_change(), None);
}

#[test]
fn short_press_switches_light_off_and_on() {
    let (mut knob, mut adapter, mut light) = setup(20);
    let before = light.brightness();

    adapter.latch(status::PUSHP);
    knob.tick(0, &mut adapter, &mut light);
    adapter.latch(status::PUSHR);
    knob.tick(150, &mut adapter, &mut light);
    assert!(!light.is_on());
    assert_eq!(light.take_change(), Some(NotifyReason::Button));

    adapter.latch(status::PUSHP | status::PUSHR);
    knob.tick(400, &mut adapter, &mut light);
    assert_eq!(light.brightness(), before);
    assert_eq!(adapter.colors.as_slice(), &[BLUE, BLUE, BLUE]);
}

#[test]
fn long_press_from_off_restores_preset_one() {
    let (mut knob, mut adapter, mut light) = setup(20);
    light.set_brightness(0);

    adapter.latch(status::PUSHP);
    knob.tick(0, &mut adapter, &mut light);
    knob.tick(1_200, &mut adapter, &mut light);

    assert_eq!(light.brightness(), 160);
    assert_eq!(light.effect_index(), 3);
    assert_eq!(light.take_change(), Some(NotifyReason::EffectChanged));
    assert_eq!(knob.mode(), OperatingMode::Brightness);

    adapter.latch(status::PUSHR);
    knob.tick(1_300, &mut adapter, &mut light);
    assert!(light.is_on());
    assert_eq!(light.take_change(), None);
}

#[test]
fn effect_selection_session_then_timeout() {
    let (mut knob, mut adapter, mut light) = setup(5);

    adapter.latch(status::PUSHP);
    knob.tick(0, &mut adapter, &mut light);
    knob.tick(1_001, &mut adapter, &mut light);
    adapter.latch(status::PUSHR);
    knob.tick(1_100, &mut adapter, &mut light);
    assert_eq!(knob.mode(), OperatingMode::Effect);
    assert_eq!(adapter.colors.last(), Some(&RED));

    adapter.latch(status::RDEC);
    knob.tick(2_000, &mut adapter, &mut light);
    assert_eq!(light.effect_index(), 4);
    adapter.latch(status::RINC);
    knob.tick(2_100, &mut adapter, &mut light);
    assert_eq!(light.effect_index(), 0);
    assert_eq!(light.take_change(), Some(NotifyReason::EffectChanged));

    knob.tick(32_100, &mut adapter, &mut light);
    assert_eq!(knob.mode(), OperatingMode::Effect);
    knob.tick(32_101, &mut adapter, &mut light);
    assert_eq!(knob.mode(), OperatingMode::Brightness);
    assert_eq!(adapter.colors.last(), Some(&BLUE));
}

#[test]
fn timestamps_wrapping_past_u32_max() {
    let start = u32::MAX - 500;
    let mut knob = KnobController::new(KnobConfig::default(), start);
    let mut adapter = StatusBusAdapter::default();
    let mut light = LightState::with_effect_count(8);

    adapter.latch(status::PUSHP);
    knob.tick(start, &mut adapter, &mut light);
    knob.tick(start.wrapping_add(1_001), &mut adapter, &mut light);
    assert_eq!(knob.mode(), OperatingMode::Effect);

    adapter.latch(status::PUSHR);
    knob.tick(start.wrapping_add(1_050), &mut adapter, &mut light);
    knob.tick(start.wrapping_add(31_051), &mut adapter, &mut light);
    assert_eq!(knob.mode(), OperatingMode::Brightness);
}

#[test]
fn dimming_to_off_then_preset_recall_reports_both_changes() {
    let (mut knob, mut adapter, mut light) = setup(20);
    light.set_brightness(16);

    adapter.latch(status::RDEC);
    knob.tick(5, &mut adapter, &mut light);
    assert!(!light.is_on());

    adapter.latch(status::PUSHP);
    knob.tick(10, &mut adapter, &mut light);
    knob.tick(1_100, &mut adapter, &mut light);
    assert_eq!(light.brightness(), 160);

    // Both land before the next sync drain; neither may be lost.
    assert_eq!(light.take_change(), Some(NotifyReason::Button));
    assert_eq!(light.take_change(), Some(NotifyReason::EffectChanged));
    assert_eq!(light.take_change(), None);
}
