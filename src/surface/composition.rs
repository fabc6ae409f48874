use std::collections::BTreeSet;

use crate::assets::fonts::{FontBook, TextEngine};
use crate::assets::raster::Raster;
use crate::assets::resolver::AssetResolver;
use crate::foundation::config::SurfaceConfig;
use crate::foundation::core::{Point, Rect, Rgba8, Size, Vec2, is_positive_size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::geometry::scale::{
    centered_in, reposition_proportionally, scale_frame_about_center, scale_rect, translate_frame,
};
use crate::layer::{
    ImageLayer, LayerEvent, LayerId, LayerKind, LayerObserver, LayerRef, TextLayer,
};
use crate::render::bitmap::Bitmap;
use crate::render::job::RenderJob;
use crate::render::snapshot::{ImageItem, RenderSnapshot, TextItem};
use crate::template::model::{Template, TextSpec};

/// A background photo with image and text layers on top, edited in screen space and exported
/// at the background's resolution.
///
/// Paint order is fixed: background, image layers in insertion order, then text layers in
/// insertion order. Layer events are delivered only while the layer is subscribed, which it is
/// from insertion until removal.
#[derive(Debug)]
pub struct CompositionSurface {
    config: SurfaceConfig,
    engine: TextEngine,
    background: Option<Raster>,
    images: Vec<ImageLayer>,
    texts: Vec<TextLayer>,
    screen_size: Size,
    subscribed: BTreeSet<LayerId>,
    next_id: u64,
}

impl CompositionSurface {
    /// Empty surface with no background and a zero screen size.
    pub fn new(config: SurfaceConfig, fonts: FontBook) -> PhotoplateResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            engine: TextEngine::new(fonts)?,
            background: None,
            images: Vec::new(),
            texts: Vec::new(),
            screen_size: Size::ZERO,
            subscribed: BTreeSet::new(),
            next_id: 0,
        })
    }

    /// Open `template`: resolve its background and create one text layer per text spec.
    pub fn from_template(
        template: &Template,
        resolver: &dyn AssetResolver,
        fonts: FontBook,
        config: SurfaceConfig,
    ) -> PhotoplateResult<Self> {
        template.validate()?;
        let mut surface = Self::new(config, fonts)?;
        let background = resolver.resolve(&template.background)?;
        if background.is_empty() {
            return Err(PhotoplateError::asset_not_found(format!(
                "background \"{}\" decoded to an empty {}x{} raster",
                template.background,
                background.width(),
                background.height()
            )));
        }
        surface.background = Some(background);
        for spec in &template.texts {
            surface.add_text(spec)?;
        }
        tracing::debug!(
            template = %template.name,
            texts = template.texts.len(),
            "opened template"
        );
        Ok(surface)
    }

    /// Style and sizing constants.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Fonts available to text layers.
    pub fn fonts(&self) -> &FontBook {
        self.engine.book()
    }

    /// Current background, if any.
    pub fn background(&self) -> Option<&Raster> {
        self.background.as_ref()
    }

    /// Size of the on-screen canvas layer frames are expressed against.
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Image layers, bottom to top.
    pub fn image_layers(&self) -> &[ImageLayer] {
        &self.images
    }

    /// Text layers, bottom to top.
    pub fn text_layers(&self) -> &[TextLayer] {
        &self.texts
    }

    /// Text layer with identity `id`.
    pub fn text_layer(&self, id: LayerId) -> Option<&TextLayer> {
        self.texts.iter().find(|t| t.id() == id)
    }

    /// Image layer with identity `id`.
    pub fn image_layer(&self, id: LayerId) -> Option<&ImageLayer> {
        self.images.iter().find(|i| i.id() == id)
    }

    /// Layer with identity `id`, of either kind.
    pub fn layer(&self, id: LayerId) -> Option<LayerRef<'_>> {
        self.text_layer(id)
            .map(LayerRef::Text)
            .or_else(|| self.image_layer(id).map(LayerRef::Image))
    }

    /// Every layer, bottom to top: all image layers, then all text layers.
    pub fn paint_order(&self) -> Vec<LayerRef<'_>> {
        self.images
            .iter()
            .map(LayerRef::Image)
            .chain(self.texts.iter().map(LayerRef::Text))
            .collect()
    }

    /// Number of layers of both kinds.
    pub fn layer_count(&self) -> usize {
        self.images.len() + self.texts.len()
    }

    /// `true` while events for `id` are delivered.
    pub fn is_subscribed(&self, id: LayerId) -> bool {
        self.subscribed.contains(&id)
    }

    /// Append a text layer showing the placeholder content, centered on screen.
    pub fn add_text(&mut self, spec: &TextSpec) -> PhotoplateResult<LayerId> {
        let id = self.alloc_id();
        let mut layer = TextLayer::create(id, spec, &mut self.engine, &self.config)?;
        layer.set_frame(centered_in(layer.frame().size(), self.screen_size));
        tracing::debug!(%id, font = %spec.font, size = spec.size, "added text layer");
        self.texts.push(layer);
        self.subscribed.insert(id);
        Ok(id)
    }

    /// Append a photo above earlier images and below all text, centered on screen.
    pub fn add_image(&mut self, raster: &Raster) -> PhotoplateResult<LayerId> {
        let id = self.alloc_id();
        let mut layer = ImageLayer::create(id, raster, &self.config)?;
        layer.set_frame(centered_in(layer.frame().size(), self.screen_size));
        tracing::debug!(
            %id,
            width = layer.raster().width(),
            height = layer.raster().height(),
            "added image layer"
        );
        self.images.push(layer);
        self.subscribed.insert(id);
        Ok(id)
    }

    /// Replace the background with the square center crop of `raster`. Layer frames are left
    /// untouched.
    pub fn update_background(&mut self, raster: &Raster) -> PhotoplateResult<()> {
        if raster.is_empty() {
            return Err(PhotoplateError::invalid_geometry(format!(
                "background must not be empty, got {}x{}",
                raster.width(),
                raster.height()
            )));
        }
        let squared = raster.square_crop();
        tracing::debug!(side = squared.width(), "updated background");
        self.background = Some(squared);
        Ok(())
    }

    /// Remove a layer and stop delivering its events. Returns whether a layer was removed.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let before = self.layer_count();
        self.texts.retain(|t| t.id() != id);
        self.images.retain(|i| i.id() != id);
        self.subscribed.remove(&id);
        let removed = self.layer_count() != before;
        if removed {
            tracing::debug!(%id, "removed layer");
        }
        removed
    }

    /// Record a new screen size and lay layers out again. Returns `false` when the size is
    /// unchanged.
    ///
    /// Coming from a zero size, every layer is centered. Otherwise text origins move
    /// proportionally with their size kept, and image frames are mapped into the new size.
    /// A zero target size is recorded without touching any frame.
    pub fn on_resize(&mut self, new_size: Size) -> PhotoplateResult<bool> {
        if !(new_size.width.is_finite() && new_size.height.is_finite())
            || new_size.width < 0.0
            || new_size.height < 0.0
        {
            return Err(PhotoplateError::invalid_geometry(format!(
                "screen size must be finite and >= 0, got {}x{}",
                new_size.width, new_size.height
            )));
        }
        if new_size == self.screen_size {
            return Ok(false);
        }

        let old = self.screen_size;
        if is_positive_size(new_size) {
            if is_positive_size(old) {
                for t in &mut self.texts {
                    t.set_frame(reposition_proportionally(t.frame(), old, new_size)?);
                }
                for i in &mut self.images {
                    i.set_frame(scale_rect(i.frame(), old, new_size)?);
                }
            } else {
                for t in &mut self.texts {
                    t.set_frame(centered_in(t.frame().size(), new_size));
                }
                for i in &mut self.images {
                    i.set_frame(centered_in(i.frame().size(), new_size));
                }
            }
        }
        self.screen_size = new_size;
        tracing::debug!(
            from = ?(old.width, old.height),
            to = ?(new_size.width, new_size.height),
            "relayout"
        );
        Ok(true)
    }

    /// Replace a text layer's content. Returns `false` when no such text layer exists.
    pub fn set_text_content(
        &mut self,
        id: LayerId,
        content: impl Into<String>,
    ) -> PhotoplateResult<bool> {
        let content = content.into();
        self.edit_text(id, |t, engine, config| t.set_content(content, engine, config))
    }

    /// Change a text layer's font family. Returns `false` when no such text layer exists.
    pub fn set_text_font(&mut self, id: LayerId, font: impl Into<String>) -> PhotoplateResult<bool> {
        let font = font.into();
        self.edit_text(id, |t, engine, config| t.set_font(font, engine, config))
    }

    /// Change a text layer's point size. Returns `false` when no such text layer exists.
    pub fn set_text_size(&mut self, id: LayerId, size: f64) -> PhotoplateResult<bool> {
        self.edit_text(id, |t, engine, config| t.set_size(size, engine, config))
    }

    /// Change a text layer's color. Returns `false` when no such text layer exists.
    pub fn set_text_color(&mut self, id: LayerId, color: Rgba8) -> bool {
        match self.texts.iter_mut().find(|t| t.id() == id) {
            Some(t) => {
                t.set_color(color);
                true
            }
            None => false,
        }
    }

    /// Translate a layer by `delta` in screen space. Returns `false` for unknown layers.
    pub fn drag_layer(&mut self, id: LayerId, delta: Vec2) -> bool {
        if let Some(t) = self.texts.iter_mut().find(|t| t.id() == id) {
            t.set_frame(translate_frame(t.frame(), delta));
            return true;
        }
        if let Some(i) = self.images.iter_mut().find(|i| i.id() == id) {
            i.set_frame(translate_frame(i.frame(), delta));
            return true;
        }
        false
    }

    /// Scale an image layer's frame about its center by `factor`.
    ///
    /// Text layers are sized by their content and ignore pinches; the result is `false` for
    /// them and for unknown layers.
    pub fn pinch_layer(&mut self, id: LayerId, factor: f64) -> PhotoplateResult<bool> {
        let Some(i) = self.images.iter_mut().find(|i| i.id() == id) else {
            return Ok(false);
        };
        i.set_frame(scale_frame_about_center(i.frame(), factor)?);
        Ok(true)
    }

    /// Give editing focus to text layer `id`, clearing it everywhere else.
    pub fn begin_editing(&mut self, id: LayerId) -> bool {
        if self.text_layer(id).is_none() {
            return false;
        }
        for t in &mut self.texts {
            t.set_editing(t.id() == id);
        }
        true
    }

    /// Clear editing focus on every text layer.
    pub fn end_editing(&mut self) {
        for t in &mut self.texts {
            t.set_editing(false);
        }
    }

    /// Text layer that currently has editing focus.
    pub fn editing_layer(&self) -> Option<LayerId> {
        self.texts.iter().find(|t| t.is_editing()).map(TextLayer::id)
    }

    /// Activate the delete control of layer `id`. Returns whether a layer was removed.
    pub fn request_delete(&mut self, id: LayerId) -> bool {
        let event = match self.layer(id) {
            Some(LayerRef::Text(t)) => t.delete_requested(),
            Some(LayerRef::Image(_)) => LayerEvent::DeleteRequested { layer: id },
            None => return false,
        };
        self.dispatch(event);
        self.layer(id).is_none()
    }

    /// Topmost layer whose frame contains `point`.
    pub fn layer_at(&self, point: Point) -> Option<LayerId> {
        self.paint_order()
            .iter()
            .rev()
            .find(|l| l.frame().contains(point))
            .map(LayerRef::id)
    }

    /// Kind of layer `id`, if it exists.
    pub fn layer_kind(&self, id: LayerId) -> Option<LayerKind> {
        self.layer(id).map(|l| l.kind())
    }

    /// Capture everything an export needs without copying pixels.
    #[tracing::instrument(skip(self), fields(layers = self.layer_count()))]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            background: self.background.clone(),
            screen_size: self.screen_size,
            export_max_dimension: self.config.export_max_dimension,
            control_width: self.config.control_width,
            images: self
                .images
                .iter()
                .map(|i| ImageItem {
                    raster: i.raster().clone(),
                    frame: i.frame(),
                })
                .collect(),
            texts: self
                .texts
                .iter()
                .map(|t| TextItem {
                    content: t.content().to_owned(),
                    font: t.font().to_owned(),
                    size: t.size(),
                    color: t.color(),
                    frame: t.frame(),
                })
                .collect(),
            fonts: self.engine.book().clone(),
        }
    }

    /// Composite the surface at export resolution. Never mutates layer state.
    ///
    /// Without a background the result is [`Bitmap::empty`].
    #[tracing::instrument(skip(self))]
    pub fn render(&self) -> PhotoplateResult<Bitmap> {
        self.snapshot().render()
    }

    /// Render a snapshot of the current state on the rayon pool.
    pub fn render_in_background(&self) -> RenderJob {
        RenderJob::spawn(self.snapshot())
    }

    fn alloc_id(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn dispatch(&mut self, event: LayerEvent) {
        if self.subscribed.contains(&event.layer()) {
            self.notify(event);
        } else {
            tracing::debug!(layer = %event.layer(), ?event, "dropping event for unsubscribed layer");
        }
    }

    fn edit_text<F>(&mut self, id: LayerId, edit: F) -> PhotoplateResult<bool>
    where
        F: FnOnce(
            &mut TextLayer,
            &mut TextEngine,
            &SurfaceConfig,
        ) -> PhotoplateResult<Option<LayerEvent>>,
    {
        let Some(layer) = self.texts.iter_mut().find(|t| t.id() == id) else {
            return Ok(false);
        };
        if let Some(event) = edit(layer, &mut self.engine, &self.config)? {
            self.dispatch(event);
        }
        Ok(true)
    }
}

impl LayerObserver for CompositionSurface {
    fn on_content_size_changed(&mut self, layer: LayerId, new_size: Size) {
        if let Some(t) = self.texts.iter_mut().find(|t| t.id() == layer) {
            let origin = t.frame().origin();
            t.set_frame(Rect::from_origin_size(origin, new_size));
            tracing::debug!(%layer, width = new_size.width, height = new_size.height, "text resized");
        }
    }

    fn on_delete_requested(&mut self, layer: LayerId) {
        self.remove_layer(layer);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composition.rs"]
mod tests;
