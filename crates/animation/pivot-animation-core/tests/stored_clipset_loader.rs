use pivot_animation_core::{parse_stored_clipset_json, Config, Mixer};

#[test]
fn parses_the_avi_clipset_fixture() {
    let json = pivot_test_fixtures::clipset_json("avi").expect("fixture json");
    let set = parse_stored_clipset_json(&json).expect("clip-set should parse");

    assert_eq!(set.name, "avi");
    assert_eq!(set.clips.len(), 4);
    for name in ["idle", "turn1", "turn2", "turn3"] {
        assert!(
            set.clips.iter().any(|c| c.name == name),
            "clip '{name}' should be present"
        );
    }
    let idle = set.clips.iter().find(|c| c.name == "idle").unwrap();
    assert_eq!(idle.duration_ms, 4000);
    assert!((idle.duration_secs() - 4.0).abs() < 1e-6);
}

#[test]
fn loaded_clips_get_mixer_ids() {
    let json = pivot_test_fixtures::clipset_json("avi").expect("fixture json");
    let set = parse_stored_clipset_json(&json).expect("clip-set should parse");

    let mut mixer = Mixer::new(Config::default());
    for clip in set.clips {
        let id = mixer.load_clip(clip);
        assert_eq!(mixer.clip(id).unwrap().id, Some(id));
    }
}

#[test]
fn rejects_zero_duration_clips() {
    let json = r#"{ "name": "bad", "clips": [ { "name": "idle", "duration": 0 } ] }"#;
    let err = parse_stored_clipset_json(json).unwrap_err();
    assert!(err.contains("duration"), "got: {err}");
}

#[test]
fn rejects_duplicate_clip_names() {
    let json = r#"{ "name": "bad", "clips": [
        { "name": "idle", "duration": 1000 },
        { "name": "idle", "duration": 2000 }
    ] }"#;
    let err = parse_stored_clipset_json(json).unwrap_err();
    assert!(err.contains("duplicate"), "got: {err}");
}

#[test]
fn rejects_malformed_json() {
    let err = parse_stored_clipset_json("{ not json").unwrap_err();
    assert!(err.contains("parse error"), "got: {err}");
}
