use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::{PhotoplateError, PhotoplateResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[derive(Clone, Debug)]
struct FontEntry {
    family: String,
    bytes: Arc<Vec<u8>>,
}

/// Font files available to text layers, keyed by the family names templates use.
///
/// A default font is mandatory: any family a template asks for that is not registered falls
/// back to it, so text layers can always be measured and drawn.
#[derive(Clone, Debug)]
pub struct FontBook {
    default_key: String,
    fonts: BTreeMap<String, FontEntry>,
}

/// Outcome of looking up a family in a [`FontBook`].
#[derive(Clone, Debug)]
pub struct ResolvedFont<'a> {
    /// Family name the font was registered under.
    pub family: &'a str,
    /// Raw font file bytes.
    pub bytes: &'a Arc<Vec<u8>>,
    /// `true` when the requested family was unknown and the default was substituted.
    pub fell_back: bool,
}

impl FontBook {
    /// Create a book whose default font is `bytes`, registered as `default_family`.
    pub fn new(default_family: impl Into<String>, bytes: Vec<u8>) -> Self {
        let family = default_family.into();
        let key = family_key(&family);
        let mut fonts = BTreeMap::new();
        fonts.insert(
            key.clone(),
            FontEntry {
                family,
                bytes: Arc::new(bytes),
            },
        );
        Self {
            default_key: key,
            fonts,
        }
    }

    /// Create a book whose default font is read from disk.
    pub fn from_default_file(
        default_family: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> PhotoplateResult<Self> {
        let bytes = read_font(path.as_ref())?;
        Ok(Self::new(default_family, bytes))
    }

    /// Register `bytes` under `family`, replacing an earlier registration of the same name.
    pub fn register(&mut self, family: impl Into<String>, bytes: Vec<u8>) {
        let family = family.into();
        self.fonts.insert(
            family_key(&family),
            FontEntry {
                family,
                bytes: Arc::new(bytes),
            },
        );
    }

    /// Builder-style [`FontBook::register`].
    pub fn with_font(mut self, family: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.register(family, bytes);
        self
    }

    /// Register a font file from disk under `family`.
    pub fn load_file(
        &mut self,
        family: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> PhotoplateResult<()> {
        let bytes = read_font(path.as_ref())?;
        self.register(family, bytes);
        Ok(())
    }

    /// Family name of the default font.
    pub fn default_family(&self) -> &str {
        self.default_entry().family.as_str()
    }

    /// `true` when `family` is registered (case-insensitive).
    pub fn contains(&self, family: &str) -> bool {
        self.fonts.contains_key(&family_key(family))
    }

    /// Registered family names, in key order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.values().map(|e| e.family.as_str())
    }

    /// Look up `family`, substituting the default font when it is unknown.
    pub fn resolve(&self, family: &str) -> ResolvedFont<'_> {
        match self.fonts.get(&family_key(family)) {
            Some(e) => ResolvedFont {
                family: &e.family,
                bytes: &e.bytes,
                fell_back: false,
            },
            None => {
                let e = self.default_entry();
                ResolvedFont {
                    family: &e.family,
                    bytes: &e.bytes,
                    fell_back: true,
                }
            }
        }
    }

    fn default_entry(&self) -> &FontEntry {
        // The default key is inserted at construction and `register` only ever replaces it.
        &self.fonts[&self.default_key]
    }
}

fn family_key(family: &str) -> String {
    family.trim().to_lowercase()
}

fn read_font(path: &Path) -> PhotoplateResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read font file '{}'", path.display()))
        .map_err(|e| PhotoplateError::asset_not_found(format!("{e:#}")))
}

/// Stateful helper for laying out and measuring text with Parley.
///
/// Every font in the [`FontBook`] is registered once at construction; lookups afterwards only
/// map a requested family to the family name Parley discovered in the font file.
pub struct TextEngine {
    book: FontBook,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    parley_families: HashMap<String, String>,
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("book", &self.book)
            .field("parley_families", &self.parley_families)
            .finish_non_exhaustive()
    }
}

impl TextEngine {
    /// Construct an engine and register every font in `book`.
    ///
    /// Fails with [`PhotoplateError::AssetNotFound`] when a font file yields no usable family.
    pub fn new(book: FontBook) -> PhotoplateResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut parley_families = HashMap::new();
        for (key, entry) in &book.fonts {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(entry.bytes.as_ref().clone()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                PhotoplateError::asset_not_found(format!(
                    "font \"{}\" contains no usable font families",
                    entry.family
                ))
            })?;
            let name = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| {
                    PhotoplateError::asset_not_found(format!(
                        "font \"{}\" has no family name",
                        entry.family
                    ))
                })?
                .to_string();
            parley_families.insert(key.clone(), name);
        }

        Ok(Self {
            book,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            parley_families,
        })
    }

    /// Fonts this engine was built from.
    pub fn book(&self) -> &FontBook {
        &self.book
    }

    /// Shape and lay out plain text, left-aligned, wrapping at `max_width` when given.
    pub fn layout(
        &mut self,
        text: &str,
        family: &str,
        size: f32,
        brush: TextBrushRgba8,
        max_width: Option<f32>,
    ) -> PhotoplateResult<parley::Layout<TextBrushRgba8>> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PhotoplateError::render(format!(
                "text size must be finite and > 0, got {size}"
            )));
        }

        let resolved = self.book.resolve(family);
        let parley_family = self
            .parley_families
            .get(&family_key(resolved.family))
            .cloned()
            .ok_or_else(|| {
                PhotoplateError::render(format!("font \"{}\" was not registered", resolved.family))
            })?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(parley_family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(
            max_width,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }

    /// Natural size of `text`, rounded up to whole units, wrapping at `max_width`.
    pub fn measure(
        &mut self,
        text: &str,
        family: &str,
        size: f64,
        max_width: Option<f64>,
    ) -> PhotoplateResult<Size> {
        let layout = self.layout(
            text,
            family,
            size as f32,
            TextBrushRgba8::default(),
            max_width.map(|w| w as f32),
        )?;
        Ok(Size::new(
            f64::from(layout.width()).ceil(),
            f64::from(layout.height()).ceil(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
