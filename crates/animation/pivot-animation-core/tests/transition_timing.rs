use pivot_animation_core::{
    ClipData, Config, CoreEvent, Inputs, Mixer, TransitionRequest, TransitionScheduler,
    TransitionState,
};

fn mk_clip(name: &str, duration_s: f32) -> ClipData {
    ClipData::new(name, (duration_s * 1000.0) as u32)
}

struct Stage {
    mixer: Mixer,
    sched: TransitionScheduler,
    idle: pivot_animation_core::ActionId,
    turn: pivot_animation_core::ActionId,
    target: pivot_animation_core::ActionId,
}

/// Base idle looping at full weight, a turn clip, and a target idle, wired the
/// way the viewer wires them.
fn stage(turn_duration_s: f32) -> Stage {
    let mut mixer = Mixer::new(Config::default());
    let idle_clip = mixer.load_clip(mk_clip("idle", 4.0));
    let turn_clip = mixer.load_clip(mk_clip("turn1", turn_duration_s));
    let target_clip = mixer.load_clip(mk_clip("idle-right", 4.0));

    let idle = mixer.clip_action(idle_clip);
    let turn = mixer.clip_action(turn_clip);
    let target = mixer.clip_action(target_clip);
    mixer.play(idle);
    mixer.update(0.0, Inputs::default());

    Stage {
        mixer,
        sched: TransitionScheduler::new(),
        idle,
        turn,
        target,
    }
}

fn step(st: &mut Stage, dt: f32) {
    st.mixer.update(dt, Inputs::default());
    st.sched.run_due(&mut st.mixer);
}

fn request(st: &mut Stage, fade_out: f32, fade_in: f32) -> bool {
    let req = TransitionRequest {
        from_idle: st.idle,
        fade_out,
        turn: st.turn,
        fade_in,
        to_idle: st.target,
    };
    let (mixer, sched) = (&mut st.mixer, &mut st.sched);
    sched.request(mixer, req)
}

#[test]
fn completion_scheduled_at_duration_minus_fades() {
    let mut st = stage(1.0);
    assert!(request(&mut st, 0.165, 0.233));
    assert_eq!(st.sched.state(), TransitionState::Transitioning);

    // D=1.0, F=0.165, I=0.233 -> completion at 0.602s after start.
    let deadline = st.sched.next_deadline().expect("pending completion");
    assert!(
        (deadline - 0.602).abs() < 1e-3,
        "deadline should be ~0.602, got {deadline}"
    );

    step(&mut st, 0.6);
    assert!(st.sched.is_busy(), "completion must not fire before 0.602s");

    step(&mut st, 0.01);
    assert_eq!(st.sched.state(), TransitionState::Idle);
    assert!(st
        .mixer
        .outputs()
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::TransitionCompleted { idle } if *idle == st.target)));

    // The target idle starts its cross-fade from the turn clip right here.
    let target = st.mixer.action(st.target).unwrap();
    assert!(target.enabled && target.playing && target.is_fading());
}

#[test]
fn repeated_requests_dropped_while_busy() {
    let mut st = stage(1.0);
    assert!(request(&mut st, 0.165, 0.233));
    assert!(!request(&mut st, 0.165, 0.233));
    assert!(!request(&mut st, 0.165, 0.233));

    let rejected = st
        .mixer
        .outputs()
        .events
        .iter()
        .filter(|e| matches!(e, CoreEvent::TransitionRejected { .. }))
        .count();
    assert_eq!(rejected, 2);

    // Still dropped mid-flight...
    step(&mut st, 0.3);
    assert!(!request(&mut st, 0.165, 0.233));

    // ...but accepted again once the completion has fired.
    step(&mut st, 0.4);
    assert_eq!(st.sched.state(), TransitionState::Idle);
    assert!(request(&mut st, 0.165, 0.233));
}

#[test]
fn completed_transition_leaves_exactly_one_idle_active() {
    let mut st = stage(1.0);
    assert!(request(&mut st, 0.165, 0.233));

    step(&mut st, 0.61); // past the 0.602 completion
    step(&mut st, 0.24); // past the 0.233 end fade

    assert_eq!(st.sched.state(), TransitionState::Idle);

    let idle = st.mixer.action(st.idle).unwrap();
    let turn = st.mixer.action(st.turn).unwrap();
    let target = st.mixer.action(st.target).unwrap();
    assert!(!idle.enabled, "source idle should have faded out");
    assert!(!turn.enabled, "turn clip should be inactive");
    assert!(target.enabled && target.playing);
    assert!((target.weight - 1.0).abs() < 1e-6);

    let active = st
        .mixer
        .actions()
        .iter()
        .filter(|a| a.effective_weight() > 0.0)
        .count();
    assert_eq!(active, 1, "exactly the target idle should be active");
}

#[test]
fn fades_longer_than_turn_clip_complete_on_next_tick() {
    // D=0.3, F=0.25, I=0.233 -> computed delay is negative; the deadline
    // clamps to "now" and the completion fires on the first following tick.
    let mut st = stage(0.3);
    assert!(request(&mut st, 0.25, 0.233));

    let deadline = st.sched.next_deadline().expect("pending completion");
    assert!(
        (deadline - st.mixer.clock()).abs() < 1e-9,
        "negative delay should clamp to the current clock"
    );

    step(&mut st, 0.0001);
    assert_eq!(st.sched.state(), TransitionState::Idle);
    assert!(st
        .mixer
        .outputs()
        .events
        .iter()
        .any(|e| matches!(e, CoreEvent::TransitionCompleted { .. })));

    // The end cross-fade begins while the out cross-fade is still running.
    let idle = st.mixer.action(st.idle).unwrap();
    let target = st.mixer.action(st.target).unwrap();
    assert!(idle.is_fading(), "out-fade still in flight");
    assert!(target.is_fading(), "end-fade already started");
}

#[test]
fn turn_clip_plays_once_from_the_start() {
    let mut st = stage(1.0);
    // Leave some time on the idle so the reset is observable.
    step(&mut st, 2.0);
    assert!(request(&mut st, 0.165, 0.233));

    let turn = st.mixer.action(st.turn).unwrap();
    assert_eq!(turn.mode, pivot_animation_core::LoopMode::Once);
    assert_eq!(turn.time, 0.0);
    assert!(turn.playing);
}
