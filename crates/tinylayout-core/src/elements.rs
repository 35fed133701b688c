// crates/tinylayout-core/src/elements.rs
use glam::{IVec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::{CoreError, Length, Result};

/// Opaque font handle. Its meaning belongs to the measurement capability.
pub type FontId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ElementType {
    Container = 0,
    Text = 1,
    Polygon = 2,
}

impl From<u8> for ElementType {
    fn from(value: u8) -> Self {
        match value {
            1 => ElementType::Text,
            2 => ElementType::Polygon,
            _ => ElementType::Container,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Placed through its margins as an absolute offset
    Free,
    /// Participates in the parent's flow
    #[default]
    Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Stretch,
    Start,
    End,
    Center,
    SpaceBetween,
    /// Defer to the parent's `align_items`
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    #[default]
    Start,
    End,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    #[default]
    Grow,
    Hide,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// 8-bit RGBA color. Serialized as `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. Alpha defaults to opaque.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidColor(value.to_string());

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Normalized RGBA for renderers.
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32) / 255.0
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Output record written by the layout engine.
///
/// Every field is overwritten on each layout call; nothing from a previous
/// call survives except the root's `x`/`y`, which act as the tree origin.
/// Positions are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComputedLayout {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
    pub min_width: i16,
    pub min_height: i16,
}

impl ComputedLayout {
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }
}

/// Style inputs shared by every element variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub width: Length,
    pub height: Length,
    pub max_width: Length,
    pub max_height: Length,
    pub min_width: Length,
    pub min_height: Length,

    pub padding_left: i16,
    pub padding_right: i16,
    pub padding_top: i16,
    pub padding_bottom: i16,

    // Margins double as the offset of free positioned elements
    pub margin_left: i16,
    pub margin_right: i16,
    pub margin_top: i16,
    pub margin_bottom: i16,

    /// Applied on all four sides
    pub border_width: i16,
    pub border_radius: i16,
    pub background_color: Color,
    pub border_color: Color,

    /// Flex grow weight, 0 = no grow
    pub grow: u8,
    /// Paint order hint only
    pub z_index: i8,
    pub positioning: Positioning,
    pub align_self: Alignment,

    pub visible: bool,
    pub displayed: bool,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: Length::None,
            height: Length::None,
            max_width: Length::None,
            max_height: Length::None,
            min_width: Length::None,
            min_height: Length::None,
            padding_left: 0,
            padding_right: 0,
            padding_top: 0,
            padding_bottom: 0,
            margin_left: 0,
            margin_right: 0,
            margin_top: 0,
            margin_bottom: 0,
            border_width: 0,
            border_radius: 0,
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            grow: 0,
            z_index: 0,
            positioning: Positioning::Layout,
            align_self: Alignment::Auto,
            visible: true,
            displayed: true,
        }
    }
}

impl BoxStyle {
    /// Padding plus border on the left and right edges.
    pub fn horizontal_inset(&self) -> i32 {
        self.padding_left as i32 + self.padding_right as i32 + 2 * self.border_width as i32
    }

    /// Padding plus border on the top and bottom edges.
    pub fn vertical_inset(&self) -> i32 {
        self.padding_top as i32 + self.padding_bottom as i32 + 2 * self.border_width as i32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub children: Vec<Element>,
    /// Main-axis spacing between consecutive children
    pub gap: i16,
    pub overflow: OverflowMode,
    pub layout_direction: LayoutDirection,
    pub justify_content: Justification,
    pub align_items: Alignment,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            gap: 0,
            overflow: OverflowMode::Grow,
            layout_direction: LayoutDirection::Row,
            justify_content: Justification::Start,
            align_items: Alignment::Stretch,
        }
    }
}

impl Container {
    pub fn new(layout_direction: LayoutDirection) -> Self {
        Self {
            layout_direction,
            ..Default::default()
        }
    }

    /// Total gap space between children along the main axis.
    pub fn total_gap(&self) -> i64 {
        match self.children.len() {
            0 => 0,
            n => (n as i64 - 1) * self.gap as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub text: String,
    /// Lines produced by the last layout call
    #[serde(skip_deserializing)]
    pub wrapped_text: Vec<String>,
    pub color: Color,
    pub text_align: TextAlignment,
    pub font: FontId,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: String::new(),
            wrapped_text: Vec::new(),
            color: Color::BLACK,
            text_align: TextAlignment::Left,
            font: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polygon {
    /// Flattened x, y pairs
    pub points: Vec<i16>,
    pub fill: bool,
    pub stroke: bool,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            fill: false,
            stroke: true,
        }
    }
}

impl Polygon {
    pub fn vertices(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.points
            .chunks_exact(2)
            .map(|pair| IVec2::new(pair[0] as i32, pair[1] as i32))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Container(Container),
    Text(Text),
    Polygon(Polygon),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Container(_) => ElementType::Container,
            ElementKind::Text(_) => ElementType::Text,
            ElementKind::Polygon(_) => ElementType::Polygon,
        }
    }
}

/// A node of the layout tree. Containers own their children outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub style: BoxStyle,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default, skip_deserializing)]
    pub layout: ComputedLayout,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            style: BoxStyle::default(),
            kind,
            layout: ComputedLayout::default(),
        }
    }

    pub fn container(layout_direction: LayoutDirection) -> Self {
        Self::new(ElementKind::Container(Container::new(layout_direction)))
    }

    pub fn row() -> Self {
        Self::container(LayoutDirection::Row)
    }

    pub fn column() -> Self {
        Self::container(LayoutDirection::Column)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text(Text {
            text: text.into(),
            ..Default::default()
        }))
    }

    pub fn polygon(points: Vec<i16>) -> Self {
        Self::new(ElementKind::Polygon(Polygon {
            points,
            ..Default::default()
        }))
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            ElementKind::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            ElementKind::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match &self.kind {
            ElementKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match &self.kind {
            ElementKind::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[Element] {
        self.as_container()
            .map(|container| container.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children().get(index)
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Element::node_count).sum::<usize>()
    }

    pub fn with_width(mut self, width: impl Into<Length>) -> Self {
        self.style.width = width.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<Length>) -> Self {
        self.style.height = height.into();
        self
    }

    pub fn with_min_width(mut self, min_width: impl Into<Length>) -> Self {
        self.style.min_width = min_width.into();
        self
    }

    pub fn with_min_height(mut self, min_height: impl Into<Length>) -> Self {
        self.style.min_height = min_height.into();
        self
    }

    pub fn with_padding(mut self, left: i16, right: i16, top: i16, bottom: i16) -> Self {
        self.style.padding_left = left;
        self.style.padding_right = right;
        self.style.padding_top = top;
        self.style.padding_bottom = bottom;
        self
    }

    pub fn with_border_width(mut self, border_width: i16) -> Self {
        self.style.border_width = border_width;
        self
    }

    pub fn with_grow(mut self, grow: u8) -> Self {
        self.style.grow = grow;
        self
    }

    pub fn with_align_self(mut self, align_self: Alignment) -> Self {
        self.style.align_self = align_self;
        self
    }

    pub fn with_font(mut self, font: FontId) -> Self {
        if let ElementKind::Text(text) = &mut self.kind {
            text.font = font;
        }
        self
    }

    /// Set the main-axis gap. No effect on leaves.
    pub fn with_gap(mut self, gap: i16) -> Self {
        if let Some(container) = self.as_container_mut() {
            container.gap = gap;
        }
        self
    }

    /// Set cross-axis alignment for children. No effect on leaves.
    pub fn with_align_items(mut self, align_items: Alignment) -> Self {
        if let Some(container) = self.as_container_mut() {
            container.align_items = align_items;
        }
        self
    }

    /// Append a child. No effect on leaves.
    pub fn with_child(mut self, child: Element) -> Self {
        if let Some(container) = self.as_container_mut() {
            container.children.push(child);
        }
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        if let Some(container) = self.as_container_mut() {
            container.children.extend(children);
        }
        self
    }
}
