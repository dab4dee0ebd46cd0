// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing surface payload parsing.
//!
//! The drawing surface reports its state as a JSON document whose
//! `objects` array mixes rectangles with every other shape the widget
//! supports. Only the `"rect"` entries are bounding boxes; everything
//! else is ignored.

use crate::models::annotation::DrawnRect;
use serde_json::Value;

/// Extract the drawn rectangles from a canvas state payload.
///
/// Objects whose `type` is not `"rect"` are skipped. Missing geometry
/// fields on a rectangle default to 0, matching the permissive handling
/// of partially described shapes.
pub fn rects_from_canvas_json(payload: &Value) -> Vec<DrawnRect> {
    let Some(objects) = payload.get("objects").and_then(Value::as_array) else {
        return Vec::new();
    };

    objects
        .iter()
        .filter(|obj| obj.get("type").and_then(Value::as_str) == Some("rect"))
        .map(|obj| serde_json::from_value(obj.clone()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_non_rect_objects() {
        let payload = json!({
            "objects": [
                {"type": "rect", "left": 10.0, "top": 20.0, "width": 30.0, "height": 40.0},
                {"type": "circle", "left": 1.0, "top": 2.0, "radius": 5.0},
                {"type": "rect", "left": 50.0, "top": 60.0, "width": 70.0, "height": 80.0},
            ]
        });

        let rects = rects_from_canvas_json(&payload);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].left, 10.0);
        assert_eq!(rects[1].top, 60.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let payload = json!({
            "objects": [
                {"type": "rect", "left": 12.5}
            ]
        });

        let rects = rects_from_canvas_json(&payload);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].left, 12.5);
        assert_eq!(rects[0].top, 0.0);
        assert_eq!(rects[0].width, 0.0);
        assert_eq!(rects[0].height, 0.0);
    }

    #[test]
    fn test_extra_widget_fields_are_ignored() {
        let payload = json!({
            "objects": [
                {"type": "rect", "left": 1.0, "top": 2.0, "width": 3.0, "height": 4.0,
                 "fill": "rgba(255, 165, 0, 0.3)", "strokeWidth": 2, "angle": 0}
            ]
        });

        let rects = rects_from_canvas_json(&payload);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].width, 3.0);
    }

    #[test]
    fn test_empty_or_missing_objects() {
        assert!(rects_from_canvas_json(&json!({"objects": []})).is_empty());
        assert!(rects_from_canvas_json(&json!({})).is_empty());
    }
}
