//! Style attributes consulted by drawing layers above the canvas

use std::rc::{Rc, Weak};

use crate::blend::BlendMode;
use crate::image_mask::Image;
use crate::stroke::{InnerJoin, LineCap, LineJoin};

/// Axis-aligned clip rectangle
///
/// Corners are stored exactly as given, including empty or inverted
/// rectangles
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ClipBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ClipBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// What `draw` operations paint
///
/// Bit 0 is fill, bit 1 is stroke, bit 2 selects the even-odd fill rule.
/// The discriminants are the bit patterns, so modes compose with `|`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum DrawingMode {
    Invisible = 0,
    Fill = 1,
    Stroke = 2,
    FillStroke = 3,
    EofFill = 5,
    EofFillStroke = 7,
}

impl DrawingMode {
    pub fn bits(self) -> u8 {
        self as u8
    }
    /// Mode for a bit pattern
    ///
    /// The even-odd bit without the fill bit has no name of its own and
    /// maps to the corresponding `Eof` mode
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => DrawingMode::Invisible,
            1 => DrawingMode::Fill,
            2 => DrawingMode::Stroke,
            3 => DrawingMode::FillStroke,
            4 | 5 => DrawingMode::EofFill,
            _ => DrawingMode::EofFillStroke,
        }
    }
}

impl std::ops::BitOr for DrawingMode {
    type Output = DrawingMode;
    fn bitor(self, rhs: DrawingMode) -> DrawingMode {
        DrawingMode::from_bits(self.bits() | rhs.bits())
    }
}

/// What text operations paint
///
/// Bit 0 is fill, bit 1 is stroke, bit 2 clips to the text shape. All
/// eight patterns are named and compose with `|`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum TextDrawingMode {
    Invisible = 0,
    Fill = 1,
    Stroke = 2,
    FillStroke = 3,
    Clip = 4,
    FillClip = 5,
    StrokeClip = 6,
    FillStrokeClip = 7,
}

impl TextDrawingMode {
    pub fn bits(self) -> u8 {
        self as u8
    }
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => TextDrawingMode::Invisible,
            1 => TextDrawingMode::Fill,
            2 => TextDrawingMode::Stroke,
            3 => TextDrawingMode::FillStroke,
            4 => TextDrawingMode::Clip,
            5 => TextDrawingMode::FillClip,
            6 => TextDrawingMode::StrokeClip,
            _ => TextDrawingMode::FillStrokeClip,
        }
    }
}

impl std::ops::BitOr for TextDrawingMode {
    type Output = TextDrawingMode;
    fn bitor(self, rhs: TextDrawingMode) -> TextDrawingMode {
        TextDrawingMode::from_bits(self.bits() | rhs.bits())
    }
}

/// Current drawing style
///
/// A plain value record. Setters store what they are given, including
/// values with no sensible rendering (negative widths, empty clip
/// rectangles); consumers decide how to treat them. The stencil is held
/// weakly and never keeps its image alive
#[derive(Debug, Clone)]
pub struct GraphicsState {
    clip_box: ClipBox,
    stencil: Option<Weak<Image>>,
    drawing_mode: DrawingMode,
    text_drawing_mode: TextDrawingMode,
    blend_mode: BlendMode,
    image_blend_mode: BlendMode,
    master_alpha: f64,
    anti_alias_gamma: f64,
    line_dash_pattern: Vec<f64>,
    line_dash_phase: f64,
    miter_limit: f64,
    inner_miter_limit: f64,
    line_width: f64,
    line_cap: LineCap,
    line_join: LineJoin,
    inner_join: InnerJoin,
    anti_aliased: bool,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            clip_box: ClipBox::new(0.0, 0.0, 0.0, 0.0),
            stencil: None,
            drawing_mode: DrawingMode::FillStroke,
            text_drawing_mode: TextDrawingMode::Fill,
            blend_mode: BlendMode::Alpha,
            image_blend_mode: BlendMode::Dst,
            master_alpha: 1.0,
            anti_alias_gamma: 1.0,
            line_dash_pattern: vec![],
            line_dash_phase: 0.0,
            miter_limit: 1.0,
            inner_miter_limit: 1.0,
            line_width: 1.0,
            line_cap: LineCap::Square,
            line_join: LineJoin::Miter,
            inner_join: InnerJoin::Miter,
            anti_aliased: true,
        }
    }
}

impl GraphicsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clip_box(&self) -> ClipBox {
        self.clip_box
    }
    pub fn set_clip_box(&mut self, r: ClipBox) {
        self.clip_box = r;
    }
    pub fn set_clip_box_coords(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clip_box = ClipBox::new(x1, y1, x2, y2);
    }

    /// Current stencil image, `None` if unset or already dropped
    pub fn stencil(&self) -> Option<Rc<Image>> {
        self.stencil.as_ref().and_then(|w| w.upgrade())
    }
    pub fn set_stencil(&mut self, image: &Rc<Image>) {
        self.stencil = Some(Rc::downgrade(image));
    }
    pub fn clear_stencil(&mut self) {
        self.stencil = None;
    }

    pub fn drawing_mode(&self) -> DrawingMode {
        self.drawing_mode
    }
    pub fn set_drawing_mode(&mut self, mode: DrawingMode) {
        self.drawing_mode = mode;
    }

    pub fn text_drawing_mode(&self) -> TextDrawingMode {
        self.text_drawing_mode
    }
    pub fn set_text_drawing_mode(&mut self, mode: TextDrawingMode) {
        self.text_drawing_mode = mode;
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    pub fn image_blend_mode(&self) -> BlendMode {
        self.image_blend_mode
    }
    pub fn set_image_blend_mode(&mut self, mode: BlendMode) {
        self.image_blend_mode = mode;
    }

    pub fn master_alpha(&self) -> f64 {
        self.master_alpha
    }
    pub fn set_master_alpha(&mut self, alpha: f64) {
        self.master_alpha = alpha;
    }

    pub fn anti_alias_gamma(&self) -> f64 {
        self.anti_alias_gamma
    }
    pub fn set_anti_alias_gamma(&mut self, gamma: f64) {
        self.anti_alias_gamma = gamma;
    }

    /// Stored dash pattern as a flat on,off,on,off,.. sequence
    pub fn line_dash_pattern(&self) -> &[f64] {
        &self.line_dash_pattern
    }
    /// Store a dash pattern of (on, off) pairs
    ///
    /// Each pair contributes two values to the stored flat sequence, in
    /// order
    pub fn set_line_dash_pattern(&mut self, dashes: &[(f64, f64)]) {
        self.line_dash_pattern.clear();
        for &(on, off) in dashes {
            self.line_dash_pattern.push(on);
            self.line_dash_pattern.push(off);
        }
    }

    pub fn line_dash_phase(&self) -> f64 {
        self.line_dash_phase
    }
    pub fn set_line_dash_phase(&mut self, phase: f64) {
        self.line_dash_phase = phase;
    }

    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }
    pub fn set_miter_limit(&mut self, limit: f64) {
        self.miter_limit = limit;
    }

    pub fn inner_miter_limit(&self) -> f64 {
        self.inner_miter_limit
    }
    pub fn set_inner_miter_limit(&mut self, limit: f64) {
        self.inner_miter_limit = limit;
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }
    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }
    pub fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
    }

    pub fn inner_join(&self) -> InnerJoin {
        self.inner_join
    }
    pub fn set_inner_join(&mut self, join: InnerJoin) {
        self.inner_join = join;
    }

    pub fn anti_aliased(&self) -> bool {
        self.anti_aliased
    }
    pub fn set_anti_aliased(&mut self, aa: bool) {
        self.anti_aliased = aa;
    }
}
