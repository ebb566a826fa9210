#![cfg(feature = "serde")]

use range_input::{
    DocumentEvent, PointerInput, SliderConfig, SliderStyle, ThumbTracking, TouchPoint,
};
use serde_json::json;
use smallvec::smallvec;

#[test]
fn document_events_use_tagged_wire_format() {
    let event = DocumentEvent::PointerMove(PointerInput::Mouse {
        page_x: 120.5,
        page_y: 8.0,
    });
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({ "type": "pointer_move", "kind": "mouse", "page_x": 120.5, "page_y": 8.0 })
    );
    let back: DocumentEvent = serde_json::from_value(value).unwrap();
    assert_eq!(back, event);

    for event in [
        DocumentEvent::PointerUp,
        DocumentEvent::PointerCancel,
        DocumentEvent::Resize,
    ] {
        let text = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<DocumentEvent>(&text).unwrap(), event);
    }
    assert_eq!(
        serde_json::to_value(DocumentEvent::PointerCancel).unwrap(),
        json!({ "type": "pointer_cancel" })
    );
}

#[test]
fn touch_moves_keep_every_point_in_order() {
    let event = DocumentEvent::PointerMove(PointerInput::Touch {
        touches: smallvec![
            TouchPoint {
                id: 7,
                page_x: 40.0,
                page_y: 2.0,
            },
            TouchPoint {
                id: 9,
                page_x: 300.0,
                page_y: 2.0,
            },
        ],
    });
    let text = serde_json::to_string(&event).unwrap();
    let back: DocumentEvent = serde_json::from_str(&text).unwrap();
    assert_eq!(back, event);
    match back {
        DocumentEvent::PointerMove(input) => assert_eq!(input.page_x(), Some(40.0)),
        other => panic!("unexpected event {other:?}"),
    }

    let empty: PointerInput =
        serde_json::from_str(r#"{ "kind": "touch", "touches": [] }"#).unwrap();
    assert_eq!(empty.page_x(), None);
}

#[test]
fn config_fills_missing_fields_from_defaults() {
    let config: SliderConfig = serde_json::from_str(
        r#"{ "max": 5000.0, "step": 100.0, "prefix": "$", "thumb_tracking": "step" }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        SliderConfig::default()
            .max(5000.0)
            .step(100.0)
            .prefix("$")
            .thumb_tracking(ThumbTracking::Step)
    );
    assert_eq!(config.validate(), Ok(()));

    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<SliderConfig>(&text).unwrap(), config);
}

#[test]
fn style_round_trips_with_optional_colors() {
    let style = SliderStyle::default()
        .thumb_color("#336699")
        .track_scale(1.5);
    let value = serde_json::to_value(&style).unwrap();
    assert_eq!(value["thumb_color"], json!("#336699"));
    assert_eq!(value["bubble_color"], json!(null));
    let back: SliderStyle = serde_json::from_value(value).unwrap();
    assert_eq!(back, style);
}
