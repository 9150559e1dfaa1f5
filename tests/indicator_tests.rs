//! Integration tests for StatusIndicator and the strip output

mod common;
use common::*;

use signal_arbiter::{
    ArbitrationConfig, LightOutput, Pattern, SignalId, StatusIndicator, StripOutput,
};
use smart_leds::RGB8;

type Indicator<'t> = StatusIndicator<'t, TestInstant, MockOutput, MockTimeSource, N>;

#[test]
fn new_indicator_shows_idle_color() {
    let timer = MockTimeSource::new();
    let config = ArbitrationConfig::default().with_idle_color(WHITE);
    let indicator = Indicator::new(MockOutput::new(), &timer, config);

    assert_eq!(indicator.current_color(), WHITE);
    assert_eq!(indicator.output().history(), &[WHITE]);
    assert_eq!(indicator.active_signal(), None);
}

#[test]
fn update_writes_resolved_color() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());

    let color = indicator.update(&[solid("aligned", 50, GREEN)]);
    assert_eq!(color, GREEN);
    assert_eq!(indicator.output().last_color(), Some(GREEN));
    assert_eq!(indicator.active_signal(), Some(SignalId("aligned")));
}

#[test]
fn steady_color_is_rewritten_every_tick() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());
    let aligned = solid("aligned", 50, GREEN);

    for _ in 0..10 {
        indicator.update(&[aligned.clone()]);
        timer.advance(20);
    }

    // idle priming plus one write per tick
    let history = indicator.output().history();
    assert_eq!(history.len(), 11);
    assert_eq!(history[0], BLACK);
    assert!(history[1..].iter().all(|color| *color == GREEN));
}

#[test]
fn blink_is_written_on_every_tick() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());
    let blink = signal("error", 100, Pattern::blink(RED, TestDuration(100)).unwrap());

    for _ in 0..10 {
        indicator.update(&[blink.clone()]);
        timer.advance(20);
    }

    // 0..=40 red, 60..=80 black, 100..=140 red, 160..=180 black
    assert_eq!(
        indicator.output().history(),
        &[BLACK, RED, RED, RED, BLACK, BLACK, RED, RED, RED, BLACK, BLACK]
    );
}

#[test]
fn takeover_restarts_pattern_from_first_color() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());
    let mode = signal(
        "mode",
        40,
        Pattern::alternate(YELLOW, BLUE, TestDuration(100)).unwrap(),
    );
    let warning = signal("warning", 80, Pattern::blink(PINK, TestDuration(100)).unwrap());

    timer.set_time(TestInstant(1_000));
    indicator.update(&[mode.clone()]);
    timer.advance(60);
    assert_eq!(indicator.update(&[mode.clone()]), BLUE);

    timer.advance(20);
    assert_eq!(indicator.update(&[mode, warning]), PINK);
    assert_eq!(indicator.elapsed(), Some(TestDuration(0)));
}

#[test]
fn withdrawn_signals_fall_back_to_idle() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());

    indicator.update(&[solid("endgame", 60, BLUE)]);
    timer.advance(20);
    assert_eq!(indicator.update(&[]), BLACK);
    assert_eq!(indicator.active_signal(), None);
}

#[test]
fn reset_returns_to_idle() {
    let timer = MockTimeSource::new();
    let mut indicator = Indicator::new(MockOutput::new(), &timer, ArbitrationConfig::default());

    indicator.update(&[solid("endgame", 60, BLUE)]);
    indicator.reset();

    assert_eq!(indicator.current_color(), BLACK);
    assert_eq!(indicator.active_signal(), None);
    assert_eq!(indicator.output().last_color(), Some(BLACK));
}

#[test]
fn strip_fills_every_cell() {
    let mut strip = StripOutput::<_, 4>::new(MockStrip::new());
    strip.apply(RED);

    let frames = &strip.writer().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_slice(), &[RGB8::new(255, 0, 0); 4]);
    assert_eq!(strip.dropped_frames(), 0);
}

#[test]
fn strip_applies_brightness() {
    let mut strip = StripOutput::<_, 2>::new(MockStrip::new()).with_brightness(127);
    strip.apply(WHITE);
    assert_eq!(
        strip.writer().frames[0].as_slice(),
        &[RGB8::new(127, 127, 127); 2]
    );
}

#[test]
fn failed_strip_write_is_dropped() {
    let mut driver = MockStrip::new();
    driver.fail = true;
    let mut strip = StripOutput::<_, 3>::new(driver);

    strip.apply(RED);
    strip.apply(GREEN);

    assert_eq!(strip.dropped_frames(), 2);
    assert!(strip.writer().frames.is_empty());
}

#[test]
fn indicator_keeps_running_when_strip_fails() {
    let timer = MockTimeSource::new();
    let mut driver = MockStrip::new();
    driver.fail = true;
    let strip = StripOutput::<_, 3>::new(driver);
    let mut indicator = StatusIndicator::<TestInstant, _, MockTimeSource, N>::new(
        strip,
        &timer,
        ArbitrationConfig::default(),
    );
    let blink = signal("error", 100, Pattern::blink(RED, TestDuration(100)).unwrap());

    for _ in 0..5 {
        indicator.update(&[blink.clone()]);
        timer.advance(20);
    }

    assert_eq!(indicator.active_signal(), Some(SignalId("error")));
    // idle priming plus five ticks
    assert_eq!(indicator.output().dropped_frames(), 6);
}

#[test]
fn strip_catches_up_after_failed_write() {
    let timer = MockTimeSource::new();
    let strip = StripOutput::<_, 3>::new(MockStrip::new());
    let mut indicator = StatusIndicator::<TestInstant, _, MockTimeSource, N>::new(
        strip,
        &timer,
        ArbitrationConfig::default(),
    );
    let error = solid("error", 100, RED);
    let red_frame = [RGB8::new(255, 0, 0); 3];

    indicator.output_mut().writer_mut().fail = true;
    assert_eq!(indicator.update(&[error.clone()]), RED);
    assert_eq!(indicator.output().dropped_frames(), 1);
    // the strip still shows the idle frame
    let frames = &indicator.output().writer().frames;
    assert_eq!(frames.last().map(|f| f.as_slice()), Some(&[RGB8::new(0, 0, 0); 3][..]));

    indicator.output_mut().writer_mut().fail = false;
    for _ in 0..50 {
        timer.advance(20);
        assert_eq!(indicator.update(&[error.clone()]), RED);
    }

    let frames = &indicator.output().writer().frames;
    assert_eq!(frames.last().map(|f| f.as_slice()), Some(&red_frame[..]));
    assert_eq!(frames.len(), 51);
    assert_eq!(indicator.output().dropped_frames(), 1);
}
