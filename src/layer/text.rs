use crate::assets::fonts::TextEngine;
use crate::foundation::config::SurfaceConfig;
use crate::foundation::core::{Point, Rect, Rgba8, Size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::geometry::scale::inset_for_control;
use crate::layer::{LayerEvent, LayerId};
use crate::template::model::TextSpec;

/// A single editable run of text.
///
/// The frame includes a square delete control of side `control_width` on the top/right; the
/// text itself occupies [`TextLayer::content_frame`]. Frame sizes only change through
/// [`LayerEvent::ContentSizeChanged`], which the owning surface applies.
#[derive(Clone, Debug)]
pub struct TextLayer {
    id: LayerId,
    content: String,
    font: String,
    size: f64,
    color: Rgba8,
    frame: Rect,
    editing: bool,
}

impl TextLayer {
    /// Create a layer showing the placeholder content, styled from `spec`.
    ///
    /// The frame is sized from the measured natural size with its origin at zero.
    pub fn create(
        id: LayerId,
        spec: &TextSpec,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Self> {
        spec.validate()?;
        let color = spec.parsed_color()?;
        warn_on_fallback(engine, &spec.font);

        let mut layer = Self {
            id,
            content: config.placeholder_text.clone(),
            font: spec.font.clone(),
            size: spec.point_size(),
            color,
            frame: Rect::ZERO,
            editing: false,
        };
        let natural = layer.natural_size(engine, config)?;
        layer.frame = Rect::from_origin_size(Point::ORIGIN, natural);
        Ok(layer)
    }

    /// Layer identity.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Current text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Requested font family (may be unknown to the font book).
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Point size in screen space.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Text color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Frame in screen space, delete control included.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Frame without the delete-control margin.
    pub fn content_frame(&self, control_width: f64) -> Rect {
        inset_for_control(self.frame, control_width)
    }

    /// `true` while the layer has editing focus and shows its delete control.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Measured text size wrapped at `max_text_width`, grown by the control width on both axes.
    pub fn natural_size(
        &self,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Size> {
        let text = engine.measure(
            &self.content,
            &self.font,
            self.size,
            Some(config.max_text_width),
        )?;
        Ok(Size::new(
            text.width + config.control_width,
            text.height + config.control_width,
        ))
    }

    /// Replace the text and re-measure.
    pub fn set_content(
        &mut self,
        content: impl Into<String>,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Option<LayerEvent>> {
        self.content = content.into();
        self.size_change(engine, config)
    }

    /// Switch font family and re-measure. Unknown families render with the default font.
    pub fn set_font(
        &mut self,
        font: impl Into<String>,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Option<LayerEvent>> {
        let font = font.into();
        warn_on_fallback(engine, &font);
        self.font = font;
        self.size_change(engine, config)
    }

    /// Change the point size and re-measure.
    pub fn set_size(
        &mut self,
        size: f64,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Option<LayerEvent>> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PhotoplateError::invalid_geometry(format!(
                "text size must be finite and > 0, got {size}"
            )));
        }
        self.size = size;
        self.size_change(engine, config)
    }

    /// Change the color. Never affects the frame.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    /// Event raised when the delete control is activated.
    pub fn delete_requested(&self) -> LayerEvent {
        LayerEvent::DeleteRequested { layer: self.id }
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    fn size_change(
        &self,
        engine: &mut TextEngine,
        config: &SurfaceConfig,
    ) -> PhotoplateResult<Option<LayerEvent>> {
        let size = self.natural_size(engine, config)?;
        Ok((size != self.frame.size()).then_some(LayerEvent::ContentSizeChanged {
            layer: self.id,
            size,
        }))
    }
}

fn warn_on_fallback(engine: &TextEngine, family: &str) {
    let resolved = engine.book().resolve(family);
    if resolved.fell_back {
        tracing::warn!(
            requested = family,
            fallback = resolved.family,
            "unknown font family, using default font"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/text.rs"]
mod tests;
