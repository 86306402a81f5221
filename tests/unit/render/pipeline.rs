use super::*;
use crate::{
    composition::model::{Background, ImageSource, Source},
    foundation::core::{Canvas, Fps},
};

fn comp() -> Composition {
    Composition {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        duration: FrameIndex(45),
        background: Background::default(),
        source: Source::Image(ImageSource {
            source: "stills/cover.jpg".to_string(),
        }),
        sweep: Default::default(),
    }
}

#[test]
fn rejects_empty_and_overlong_ranges() {
    let comp = comp();
    let empty = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert!(plan_frames(&comp, empty).is_err());

    let overlong = FrameRange::new(FrameIndex(0), FrameIndex(46)).unwrap();
    assert!(plan_frames(&comp, overlong).is_err());
}

#[test]
fn plans_whole_composition() {
    let comp = comp();
    let range = FrameRange::new(FrameIndex(0), comp.duration).unwrap();
    let plans = plan_frames(&comp, range).unwrap();
    assert_eq!(plans.len(), 45);
    assert_eq!(plans[0].frame, FrameIndex(0));
    assert_eq!(plans[44].frame, FrameIndex(44));
}

#[test]
fn parallel_matches_sequential() {
    let comp = comp();
    let range = FrameRange::new(FrameIndex(0), comp.duration).unwrap();

    let seq = plan_frames_with(
        &comp,
        range,
        &PlanThreading {
            parallel: false,
            threads: None,
        },
    )
    .unwrap();
    let par = plan_frames_with(
        &comp,
        range,
        &PlanThreading {
            parallel: true,
            threads: Some(4),
        },
    )
    .unwrap();

    assert_eq!(
        serde_json::to_string(&seq).unwrap(),
        serde_json::to_string(&par).unwrap()
    );
}

#[test]
fn plan_frame_matches_batch_entry() {
    let comp = comp();
    let one = plan_frame(&comp, FrameIndex(20)).unwrap();
    let range = FrameRange::new(FrameIndex(20), FrameIndex(21)).unwrap();
    let batch = plan_frames(&comp, range).unwrap();
    assert_eq!(
        serde_json::to_string(&one).unwrap(),
        serde_json::to_string(&batch[0]).unwrap()
    );
}
