use super::*;
use kernel::Vertex;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn sequencer(mode: ProofMode) -> Sequencer {
    Sequencer::new(mode, SequencerConfig::default())
}

fn step_and_variant(seq: &Sequencer) -> (u8, Vertex) {
    let s = seq.state();
    (s.step, s.active_variant)
}

// =============================================================
// Runtime requirements
// =============================================================

#[test]
fn auto_start_mode_needs_runtime() {
    let mut seq = sequencer(ProofMode::Theorem);
    assert_eq!(seq.mount(), Err(SequencerError::NoRuntime));
    assert_eq!(seq.state(), AnimationState::initial(ProofMode::Theorem));
}

#[test]
fn manual_mode_mounts_without_runtime() {
    let mut seq = sequencer(ProofMode::Supplementary);
    assert_eq!(seq.mount(), Ok(()));
    assert!(!seq.state().has_started);
    assert_eq!(seq.pending_timers(), 0);
    assert_eq!(seq.start(), Err(SequencerError::NoRuntime));
}

// =============================================================
// Playback
// =============================================================

#[tokio::test(start_paused = true)]
async fn mount_applies_zero_offset_cues_immediately() {
    let mut seq = sequencer(ProofMode::Theorem);
    seq.mount().unwrap();
    assert_eq!(step_and_variant(&seq), (0, Vertex::A));
    assert!(seq.state().has_started);
    let batches = seq.timeline().batches().len();
    assert_eq!(seq.pending_timers(), batches - 1);
}

#[tokio::test(start_paused = true)]
async fn manual_mode_waits_for_start() {
    let mut seq = sequencer(ProofMode::Supplementary);
    seq.mount().unwrap();
    time::sleep(ms(2000)).await;
    assert_eq!(seq.state(), AnimationState::initial(ProofMode::Supplementary));

    seq.start().unwrap();
    time::sleep(ms(1600)).await;
    assert_eq!(step_and_variant(&seq), (2, Vertex::B));
    assert!(seq.state().has_started);
}

#[tokio::test(start_paused = true)]
async fn plays_to_finish_and_drains_timers() {
    let mut seq = sequencer(ProofMode::Sum360);
    seq.mount().unwrap();
    time::sleep(ms(3600)).await;
    let state = seq.state();
    assert_eq!(state.step, 3);
    assert!(state.is_finished);
    assert_eq!(seq.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn subscriber_sees_each_step() {
    let mut seq = sequencer(ProofMode::Sum360);
    let mut rx = seq.subscribe();
    seq.mount().unwrap();
    rx.borrow_and_update();
    let mut steps = Vec::new();
    while rx.changed().await.is_ok() {
        let state = *rx.borrow_and_update();
        steps.push(state.step);
        if state.is_finished {
            break;
        }
    }
    assert_eq!(steps, vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn angle_sum_mount_has_lead_in() {
    let mut seq = sequencer(ProofMode::AngleSum);
    seq.mount().unwrap();
    time::sleep(ms(550)).await;
    assert_eq!(seq.state().step, 0);
    time::sleep(ms(100)).await;
    assert_eq!(seq.state().step, 1);
}

#[tokio::test(start_paused = true)]
async fn angle_sum_restart_skips_lead_in() {
    let mut seq = sequencer(ProofMode::AngleSum);
    seq.mount().unwrap();
    time::sleep(ms(2000)).await;
    assert_eq!(seq.state().step, 2);

    seq.restart().unwrap();
    assert_eq!(seq.state().step, 0);
    time::sleep(ms(150)).await;
    assert_eq!(seq.state().step, 1);
}

#[tokio::test(start_paused = true)]
async fn time_scale_divides_offsets() {
    let mut seq = Sequencer::new(ProofMode::Sum360, SequencerConfig::new(2.0).unwrap());
    seq.mount().unwrap();
    time::sleep(ms(1100)).await;
    assert_eq!(seq.state().step, 2);
    time::sleep(ms(700)).await;
    assert!(seq.state().is_finished);
}

// =============================================================
// Cancellation
// =============================================================

#[tokio::test(start_paused = true)]
async fn restart_mid_phase_discards_old_schedule() {
    let mut seq = sequencer(ProofMode::Supplementary);
    seq.mount().unwrap();
    seq.start().unwrap();
    time::sleep(ms(5600)).await;
    assert_eq!(step_and_variant(&seq), (1, Vertex::C));

    seq.restart().unwrap();
    assert_eq!(step_and_variant(&seq), (0, Vertex::B));

    // Old schedule would show C step 2 at 6500.
    time::sleep(ms(950)).await;
    assert_eq!(step_and_variant(&seq), (1, Vertex::B));

    // Old schedule would switch to A at 10000.
    time::sleep(ms(3500)).await;
    assert_eq!(step_and_variant(&seq), (3, Vertex::B));
}

#[tokio::test(start_paused = true)]
async fn restart_tracks_fresh_timeline_exactly() {
    let mut seq = sequencer(ProofMode::Theorem);
    seq.mount().unwrap();
    time::sleep(ms(7300)).await;
    seq.restart().unwrap();

    let timeline = Timeline::for_mode(ProofMode::Theorem);
    let mut elapsed = ms(50);
    time::sleep(elapsed).await;
    while elapsed < ms(19_000) {
        assert_eq!(seq.state(), timeline.state_at(elapsed), "at {elapsed:?} after restart");
        time::sleep(ms(100)).await;
        elapsed += ms(100);
    }
}

#[tokio::test(start_paused = true)]
async fn cancel_freezes_state() {
    let mut seq = sequencer(ProofMode::Definition);
    seq.start().unwrap();
    time::sleep(ms(1600)).await;
    seq.cancel();
    let frozen = seq.state();
    time::sleep(ms(10_000)).await;
    assert_eq!(seq.state(), frozen);
    assert_eq!(seq.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn drop_stops_updates() {
    let mut seq = sequencer(ProofMode::Theorem);
    let rx = seq.subscribe();
    seq.mount().unwrap();
    time::sleep(ms(600)).await;
    let before = seq.state();
    drop(seq);
    time::sleep(ms(20_000)).await;
    assert_eq!(*rx.borrow(), before);
}

#[tokio::test(start_paused = true)]
async fn set_mode_cancels_and_remounts() {
    let mut seq = sequencer(ProofMode::Theorem);
    seq.mount().unwrap();
    time::sleep(ms(600)).await;
    seq.set_mode(ProofMode::Definition).unwrap();
    assert_eq!(seq.mode(), ProofMode::Definition);
    assert_eq!(seq.state(), AnimationState::initial(ProofMode::Definition));
    time::sleep(ms(5000)).await;
    assert_eq!(seq.state().step, 0);
    assert_eq!(seq.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn instances_are_isolated() {
    let mut first = sequencer(ProofMode::Theorem);
    let mut second = sequencer(ProofMode::Theorem);
    first.mount().unwrap();
    second.mount().unwrap();
    assert_ne!(first.id(), second.id());

    time::sleep(ms(3000)).await;
    second.restart().unwrap();
    time::sleep(ms(3100)).await;

    assert_eq!(step_and_variant(&first), (0, Vertex::B));
    assert_eq!(step_and_variant(&second), (2, Vertex::A));
}
