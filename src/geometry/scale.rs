//! Coordinate-space mapping between the interactive surface and the export raster.

use crate::foundation::core::{Point, Rect, Size, Vec2, is_positive_size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};

/// Map `rect`, expressed against reference size `from`, into reference size `to`.
///
/// Each axis is scaled by its own ratio, so height follows `to.height / from.height`. Mapping
/// back with the sizes swapped returns the original rectangle up to float rounding.
pub fn scale_rect(rect: Rect, from: Size, to: Size) -> PhotoplateResult<Rect> {
    if !is_positive_size(from) {
        return Err(PhotoplateError::invalid_geometry(format!(
            "scale_rect source size must be positive, got {}x{}",
            from.width, from.height
        )));
    }
    if !(to.width.is_finite() && to.height.is_finite()) || to.width < 0.0 || to.height < 0.0 {
        return Err(PhotoplateError::invalid_geometry(format!(
            "scale_rect target size must be finite and >= 0, got {}x{}",
            to.width, to.height
        )));
    }

    let sx = to.width / from.width;
    let sy = to.height / from.height;
    Ok(Rect::from_origin_size(
        Point::new(rect.x0 * sx, rect.y0 * sy),
        Size::new(rect.width() * sx, rect.height() * sy),
    ))
}

/// Remove the delete-control margin from the top and right edges of a text layer frame.
pub fn inset_for_control(frame: Rect, control_width: f64) -> Rect {
    let frame = frame.abs();
    let width = (frame.width() - control_width).max(0.0);
    let height = (frame.height() - control_width).max(0.0);
    Rect::from_origin_size(
        Point::new(frame.x0, frame.y0 + control_width),
        Size::new(width, height),
    )
}

/// Shift a frame by `delta`, keeping its size.
pub fn translate_frame(frame: Rect, delta: Vec2) -> Rect {
    frame + delta
}

/// Uniformly scale a frame's size about its center.
pub fn scale_frame_about_center(frame: Rect, factor: f64) -> PhotoplateResult<Rect> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(PhotoplateError::invalid_geometry(format!(
            "scale factor must be finite and > 0, got {factor}"
        )));
    }
    let size = frame.size() * factor;
    Ok(Rect::from_center_size(frame.center(), size))
}

/// Frame of `size` whose center coincides with the center of `container`.
pub fn centered_in(size: Size, container: Size) -> Rect {
    let origin = Point::new(
        (container.width - size.width) * 0.5,
        (container.height - size.height) * 0.5,
    );
    Rect::from_origin_size(origin, size)
}

/// Move `frame` so its origin keeps the same relative position when the container changes from
/// `from` to `to`. The frame's size is left as is.
pub fn reposition_proportionally(frame: Rect, from: Size, to: Size) -> PhotoplateResult<Rect> {
    let mapped = scale_rect(frame, from, to)?;
    Ok(Rect::from_origin_size(mapped.origin(), frame.size()))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
