//! Freehand signature pad
//!
//! Pressure-agnostic stroke capture over a container-sized surface. The pad
//! follows its container's width but keeps a fixed height; a resize clears
//! the in-progress strokes, which matches the canvas behavior in the live
//! site (the backing store is recreated at the new size).

use super::SignatureImage;

type Point = (f64, f64);

/// Drawing surface that collects strokes and serializes them to an image
#[derive(Debug, Clone)]
pub struct SignaturePad {
    width: u32,
    height: u32,
    strokes: Vec<Vec<Point>>,
    current: Option<Vec<Point>>,
}

impl SignaturePad {
    /// Pad sized to the container width, with the site's fixed height
    pub fn new(width: u32, height: u32) -> Self {
        SignaturePad {
            width,
            height,
            strokes: Vec::new(),
            current: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.current.is_none()
    }

    /// Track the container's new width; the height stays fixed. Existing
    /// strokes are discarded along with the old backing store.
    pub fn resize(&mut self, container_width: u32) {
        self.width = container_width;
        self.clear();
    }

    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        self.current = Some(vec![(x, y)]);
    }

    pub fn extend_stroke(&mut self, x: f64, y: f64) {
        if let Some(stroke) = self.current.as_mut() {
            stroke.push((x, y));
        }
    }

    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            if stroke.len() > 1 {
                self.strokes.push(stroke);
            }
        }
    }

    /// Discard all strokes
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    /// Serialize the current strokes to an encoded image.
    ///
    /// Returns `None` when nothing has been drawn; a blank save must not
    /// count as a signature.
    pub fn save(&self) -> Option<SignatureImage> {
        if self.strokes.is_empty() {
            return None;
        }

        let mut paths = String::new();
        for stroke in &self.strokes {
            let mut d = String::new();
            for (i, (x, y)) in stroke.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{}{:.1} {:.1} ", cmd, x, y));
            }
            paths.push_str(&format!(
                r##"<path d="{}" fill="none" stroke="#f5d485" stroke-width="1.2" stroke-linecap="round"/>"##,
                d.trim_end()
            ));
        }

        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}</svg>"#,
            self.width, self.height, self.width, self.height, paths
        );

        Some(SignatureImage::new("image/svg+xml", svg.into_bytes()))
    }
}

/// Tracks whether page scrolling must be suppressed for the pad.
///
/// The live site registers non-passive touch handlers that call
/// `preventDefault` while a touch is over the canvas; this models the same
/// condition as a predicate the event wiring can consult.
#[derive(Debug, Default)]
pub struct TouchGuard {
    draw_mode_active: bool,
    touch_down_on_pad: bool,
}

impl TouchGuard {
    pub fn new() -> Self {
        TouchGuard::default()
    }

    pub fn set_draw_mode(&mut self, active: bool) {
        self.draw_mode_active = active;
        if !active {
            self.touch_down_on_pad = false;
        }
    }

    pub fn touch_started(&mut self, over_pad: bool) {
        self.touch_down_on_pad = over_pad;
    }

    pub fn touch_ended(&mut self) {
        self.touch_down_on_pad = false;
    }

    /// Whether the page must swallow scroll gestures right now
    pub fn should_block_scroll(&self) -> bool {
        self.draw_mode_active && self.touch_down_on_pad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_with_stroke() -> SignaturePad {
        let mut pad = SignaturePad::new(400, 180);
        pad.begin_stroke(10.0, 90.0);
        pad.extend_stroke(50.0, 95.0);
        pad.extend_stroke(90.0, 85.0);
        pad.end_stroke();
        pad
    }

    #[test]
    fn empty_pad_saves_nothing() {
        let pad = SignaturePad::new(400, 180);
        assert!(pad.is_empty());
        assert!(pad.save().is_none());
    }

    #[test]
    fn save_serializes_strokes_to_svg() {
        let pad = pad_with_stroke();
        let sig = pad.save().expect("stroke should produce a signature");
        assert_eq!(sig.mime(), "image/svg+xml");
        let data_url = sig.to_data_url();
        assert!(data_url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn single_point_tap_is_not_a_stroke() {
        let mut pad = SignaturePad::new(400, 180);
        pad.begin_stroke(10.0, 10.0);
        pad.end_stroke();
        assert!(pad.save().is_none());
    }

    #[test]
    fn resize_tracks_width_keeps_height_clears_strokes() {
        let mut pad = pad_with_stroke();
        pad.resize(320);
        assert_eq!(pad.width(), 320);
        assert_eq!(pad.height(), 180);
        assert!(pad.is_empty());
    }

    #[test]
    fn clear_discards_strokes() {
        let mut pad = pad_with_stroke();
        pad.clear();
        assert!(pad.save().is_none());
    }

    #[test]
    fn touch_guard_blocks_only_in_draw_mode_with_touch_down() {
        let mut guard = TouchGuard::new();
        assert!(!guard.should_block_scroll());

        guard.set_draw_mode(true);
        assert!(!guard.should_block_scroll());

        guard.touch_started(true);
        assert!(guard.should_block_scroll());

        guard.touch_ended();
        assert!(!guard.should_block_scroll());

        guard.touch_started(true);
        guard.set_draw_mode(false);
        assert!(!guard.should_block_scroll());
    }
}
