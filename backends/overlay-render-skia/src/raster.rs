//! Glyph runs to fillable paths
//!
//! skrifa draws each outline at the requested pixel size into a kurbo path.
//! The path is then moved to its pen position, flipped from y-up font space
//! to y-down image space, and appended to one path for the whole line.

use kurbo::{Affine, BezPath, PathEl};
use overlay_core::{
    error::{RenderError, Result},
    traits::FontRef,
};
use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    MetadataProvider,
};

/// Builds the outline of `text` with its origin at `x` on `baseline`
///
/// Returns `Ok(None)` when the run has no ink (only spaces, for example).
pub fn glyph_run_path(
    font: &dyn FontRef,
    text: &str,
    size: f32,
    x: f32,
    baseline: f32,
) -> Result<Option<tiny_skia::Path>> {
    let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
        .map_err(|_| RenderError::InvalidFont)?;
    let outlines = font_ref.outline_glyphs();
    let scale = font.scale(size);

    let mut run = BezPath::new();
    let mut pen_x = x;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch).unwrap_or(0);

        if let Some(glyph) = outlines.get(skrifa::GlyphId::new(glyph_id)) {
            let mut path = BezPath::new();
            let mut pen = PathPen { path: &mut path };
            let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
            glyph
                .draw(settings, &mut pen)
                .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;

            // Flip Y (fonts use y-up, bitmaps use y-down) and move to the pen
            path.apply_affine(Affine::new([
                1.0,
                0.0,
                0.0,
                -1.0,
                f64::from(pen_x),
                f64::from(baseline),
            ]));
            run.extend(path.elements().iter().copied());
        }

        pen_x += font.advance_width(glyph_id) * scale;
    }

    Ok(to_skia_path(&run))
}

/// Translate kurbo's path format into tiny-skia's native format
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = tiny_skia::PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Bridge between skrifa's outline commands and kurbo's path format
struct PathPen<'a> {
    path: &'a mut BezPath,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((f64::from(x), f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((f64::from(x), f64::from(y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to((f64::from(cx0), f64::from(cy0)), (f64::from(x), f64::from(y)));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (f64::from(cx0), f64::from(cy0)),
            (f64::from(cx1), f64::from(cy1)),
            (f64::from(x), f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_kurbo_path_has_no_skia_path() {
        assert!(to_skia_path(&BezPath::new()).is_none());
    }

    #[test]
    fn test_square_converts() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.quad_to((10.0, 5.0), (10.0, 10.0));
        path.curve_to((8.0, 10.0), (2.0, 10.0), (0.0, 10.0));
        path.close_path();

        let skia = to_skia_path(&path).unwrap();
        let bounds = skia.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.right(), 10.0);
        assert_eq!(bounds.bottom(), 10.0);
    }
}
