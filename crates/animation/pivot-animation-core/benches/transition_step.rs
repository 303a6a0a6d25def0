use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pivot_animation_core::{
    ClipData, Config, Inputs, Mixer, TransitionRequest, TransitionScheduler,
};

fn transition_step(c: &mut Criterion) {
    c.bench_function("mixer_update_60hz", |b| {
        let mut mixer = Mixer::new(Config::default());
        let idle_clip = mixer.load_clip(ClipData::new("idle", 4000));
        let turn_clip = mixer.load_clip(ClipData::new("turn1", 1000));
        let target_clip = mixer.load_clip(ClipData::new("idle-right", 4000));

        let idle = mixer.clip_action(idle_clip);
        let turn = mixer.clip_action(turn_clip);
        let target = mixer.clip_action(target_clip);
        let mut sched = TransitionScheduler::new();
        mixer.play(idle);
        sched.request(
            &mut mixer,
            TransitionRequest {
                from_idle: idle,
                fade_out: 0.165,
                turn,
                fade_in: 0.233,
                to_idle: target,
            },
        );

        b.iter(|| {
            mixer.update(black_box(1.0 / 60.0), Inputs::default());
            sched.run_due(&mut mixer);
        });
    });
}

criterion_group!(benches, transition_step);
criterion_main!(benches);
