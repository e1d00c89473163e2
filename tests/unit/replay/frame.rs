use super::*;

const FRAME_JSON: &str = r#"{
    "entries": [
        {
            "snapshot": {
                "render_target_clip": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 100.0}
            },
            "op": {
                "kind": "draw",
                "op": {
                    "unmapped_bounds": {"x0": 50.0, "y0": 50.0, "x1": 150.0, "y1": 150.0},
                    "local_clip_rect": {"x0": 0.0, "y0": 0.0, "x1": 200.0, "y1": 200.0}
                }
            }
        },
        {
            "snapshot": {
                "transform": [1.0, 0.0, 0.0, 1.0, 500.0, 0.0],
                "render_target_clip": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 100.0},
                "alpha": 0.5
            },
            "op": {
                "kind": "strokeable",
                "stroke": "style_defined",
                "op": {
                    "unmapped_bounds": {"x0": 0.0, "y0": 0.0, "x1": 10.0, "y1": 10.0},
                    "local_clip_rect": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 100.0},
                    "paint": {"style": "stroke", "stroke_width": 2.0}
                }
            }
        },
        {
            "snapshot": {
                "render_target_clip": {"x0": 0.0, "y0": 0.0, "x1": 100.0, "y1": 100.0},
                "alpha": 0.25,
                "round_rect_clip": {
                    "matrix": [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
                    "inner_rect": {"x0": 4.0, "y0": 4.0, "x1": 96.0, "y1": 96.0},
                    "radius": 4.0,
                    "high_priority": true
                }
            },
            "op": {
                "kind": "shadow",
                "op": {
                    "caster_alpha": 1.0,
                    "caster_bounds": {"x0": 10.0, "y0": 10.0, "x1": 20.0, "y1": 20.0}
                }
            }
        }
    ]
}"#;

#[test]
fn bake_frame_accepts_and_rejects_per_entry() {
    let frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    let mut arena = BakedOpArena::default();

    let report = bake_frame(&frame, &mut arena).unwrap();
    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.accepted(), 2);
    assert_eq!(report.rejected(), 1);
    assert!(report.outcomes[1].state.is_none());
    assert_eq!(arena.len(), 2);

    let summaries = report.summaries(&arena).unwrap();
    assert_eq!(summaries.len(), 2);

    assert_eq!(summaries[0].index, 0);
    assert_eq!(summaries[0].kind, "draw");
    assert_eq!(summaries[0].clip_rect, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(
        summaries[0].clipped_bounds,
        Rect::new(50.0, 50.0, 100.0, 100.0)
    );
    assert_eq!(
        summaries[0].clip_side_flags,
        ClipSideFlags::RIGHT | ClipSideFlags::BOTTOM
    );

    assert_eq!(summaries[1].index, 2);
    assert_eq!(summaries[1].kind, "shadow");
    assert_eq!(summaries[1].alpha, 0.25);
    assert_eq!(summaries[1].clip_side_flags, ClipSideFlags::FULL);
    assert!(summaries[1].has_round_rect_clip);
    assert!(!summaries[1].has_projection_mask);
}

#[test]
fn op_kinds_are_named_after_their_tag() {
    let frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    let kinds: Vec<_> = frame.entries.iter().map(|e| e.op.kind()).collect();
    assert_eq!(kinds, vec!["draw", "strokeable", "shadow"]);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = FrameDesc::from_json_str("{\"entries\": 3}").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validate_rejects_negative_stroke_width() {
    let mut frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    if let OpDesc::Strokeable { op, .. } = &mut frame.entries[1].op {
        op.paint = Some(crate::record::op::Paint::stroke(-1.0));
    }
    let err = frame.validate().unwrap_err();
    assert!(err.to_string().contains("entry 1: stroke_width"));

    let mut arena = BakedOpArena::default();
    assert!(bake_frame(&frame, &mut arena).is_err());
    assert!(arena.is_empty());
}

#[test]
fn validate_rejects_non_finite_snapshot() {
    let mut frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    frame.entries[0].snapshot.alpha = f32::NAN;
    assert!(frame.validate().is_err());

    let mut frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    frame.entries[2].snapshot.transform = Affine::new([f64::INFINITY, 0.0, 0.0, 1.0, 0.0, 0.0]);
    let err = frame.validate().unwrap_err();
    assert!(err.to_string().contains("entry 2: snapshot transform"));
}

#[test]
fn summaries_fail_after_arena_reset() {
    let frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    let mut arena = BakedOpArena::default();
    let report = bake_frame(&frame, &mut arena).unwrap();
    arena.reset();
    assert!(report.summaries(&arena).is_err());
}

#[test]
fn summaries_and_outcomes_share_op_kind_names() {
    let frame = FrameDesc::from_json_str(FRAME_JSON).unwrap();
    let mut arena = BakedOpArena::default();
    let report = bake_frame(&frame, &mut arena).unwrap();

    let outcome_kinds: Vec<_> = report.outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(outcome_kinds, vec!["draw", "strokeable", "shadow"]);

    for summary in report.summaries(&arena).unwrap() {
        assert_eq!(summary.kind, frame.entries[summary.index].op.kind());
    }
}
