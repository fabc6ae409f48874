//! CPU rasterization of a [`RenderSnapshot`] with `vello_cpu`.

use std::sync::Arc;

use crate::assets::fonts::{TextBrushRgba8, TextEngine};
use crate::assets::raster::Raster;
use crate::foundation::core::{Affine, Rect, Size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::geometry::scale::{inset_for_control, scale_rect};
use crate::render::bitmap::Bitmap;
use crate::render::snapshot::{ImageItem, RenderSnapshot, TextItem};

/// Extra wrap width, in export pixels, so text that fit on screen still fits after scaling.
const WRAP_SLACK_PX: f64 = 1.0;

/// Composite background, image layers and text layers into one export bitmap.
///
/// Paint order is fixed: background at the origin, images in insertion order, then text in
/// insertion order. A snapshot without a background yields [`Bitmap::empty`].
#[tracing::instrument(skip(snap), fields(layers = snap.layer_count()))]
pub(crate) fn render_snapshot(snap: &RenderSnapshot) -> PhotoplateResult<Bitmap> {
    let Some(background) = snap.background.as_ref() else {
        tracing::debug!("no background, returning empty bitmap");
        return Ok(Bitmap::empty());
    };

    let export_bg = background.downsample(snap.export_max_dimension)?;
    let export_size = export_bg.size();
    let (w, h) = pixmap_dims(export_bg.width(), export_bg.height())?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    draw_raster(
        &mut ctx,
        &export_bg,
        Rect::from_origin_size((0.0, 0.0), export_size),
    )?;

    for item in &snap.images {
        draw_image(&mut ctx, item, snap.screen_size, export_size)?;
    }

    if !snap.texts.is_empty() {
        let mut engine = TextEngine::new(snap.fonts.clone())?;
        for item in &snap.texts {
            draw_text(&mut ctx, &mut engine, item, snap, export_size)?;
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(Bitmap {
        width: export_bg.width(),
        height: export_bg.height(),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    item: &ImageItem,
    screen: Size,
    export: Size,
) -> PhotoplateResult<()> {
    let dest = scale_rect(item.frame, screen, export)?;
    draw_raster(ctx, &item.raster, dest)
}

/// Stretch `raster` so it exactly covers `dest`.
fn draw_raster(
    ctx: &mut vello_cpu::RenderContext,
    raster: &Raster,
    dest: Rect,
) -> PhotoplateResult<()> {
    if raster.is_empty() || dest.width() <= 0.0 || dest.height() <= 0.0 {
        return Ok(());
    }
    let pixmap = pixmap_from_raster(raster)?;
    let pw = f64::from(raster.width());
    let ph = f64::from(raster.height());

    let tr = Affine::translate((dest.x0, dest.y0))
        * Affine::scale_non_uniform(dest.width() / pw, dest.height() / ph);
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    });
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, pw, ph));
    Ok(())
}

fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextEngine,
    item: &TextItem,
    snap: &RenderSnapshot,
    export: Size,
) -> PhotoplateResult<()> {
    let content = inset_for_control(item.frame, snap.control_width);
    let dest = scale_rect(content, snap.screen_size, export)?;
    let ratio = export.width / snap.screen_size.width;
    let size = (item.size * ratio) as f32;

    let layout = engine.layout(
        &item.content,
        &item.font,
        size,
        TextBrushRgba8::from(item.color),
        Some((dest.width() + WRAP_SLACK_PX) as f32),
    )?;

    let resolved = engine.book().resolve(&item.font);
    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(resolved.bytes.as_ref().clone()),
        0,
    );

    ctx.set_transform(affine_to_cpu(Affine::translate((dest.x0, dest.y0))));
    for line in layout.lines() {
        for line_item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = line_item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    Ok(())
}

fn pixmap_dims(width: u32, height: u32) -> PhotoplateResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PhotoplateError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PhotoplateError::render("pixmap height exceeds u16"))?;
    Ok((w, h))
}

fn pixmap_from_raster(raster: &Raster) -> PhotoplateResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(raster.width(), raster.height())?;
    let bytes = raster.premul_bytes();
    if bytes.len() != (w as usize) * (h as usize) * 4 {
        return Err(PhotoplateError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
