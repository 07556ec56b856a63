use serde::{Deserialize, Serialize};

// All lengths are twips (1/20 pt) unless noted otherwise.

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "value")]
pub enum LineSpacing {
    Auto(f32),    // multiplier (e.g. 1.0 = single, 1.15 = default)
    Exact(f32),   // fixed height in twips
    AtLeast(f32), // minimum height in twips
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProperties {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub header_margin: f32,
    pub footer_margin: f32,
}

impl Default for SectionProperties {
    /// US Letter with one-inch margins, Word's defaults.
    fn default() -> Self {
        Self {
            page_width: 12240.0,
            page_height: 15840.0,
            margin_top: 1440.0,
            margin_bottom: 1440.0,
            margin_left: 1440.0,
            margin_right: 1440.0,
            header_margin: 720.0,
            footer_margin: 720.0,
        }
    }
}

impl SectionProperties {
    /// Page width minus the left and right page margins.
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub properties: SectionProperties,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub style_id: Option<String>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
    pub line_spacing: Option<LineSpacing>,
    pub alignment: Option<Alignment>,
    pub contextual_spacing: bool,
    /// Writes `w:beforeAutospacing`/`w:afterAutospacing` off explicitly.
    pub disable_auto_spacing: bool,
}

impl Paragraph {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run {
                text: text.into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    pub text: String,
    pub font_size: Option<f32>, // points
    pub font_name: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<[u8; 3]>, // None = automatic (black)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VMerge {
    #[default]
    None,
    Restart,
    Continue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellVAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellBorder {
    pub present: bool,
    pub color: Option<[u8; 3]>,
    pub width: f32, // points
}

impl Default for CellBorder {
    fn default() -> Self {
        Self {
            present: false,
            color: None,
            width: 0.5,
        }
    }
}

impl CellBorder {
    pub fn visible(color: Option<[u8; 3]>, width: f32) -> Self {
        Self {
            present: true,
            color,
            width,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellBorders {
    pub top: CellBorder,
    pub bottom: CellBorder,
    pub left: CellBorder,
    pub right: CellBorder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableBorders {
    pub top: CellBorder,
    pub bottom: CellBorder,
    pub left: CellBorder,
    pub right: CellBorder,
    pub inside_h: CellBorder,
    pub inside_v: CellBorder,
}

impl TableBorders {
    pub fn all(color: Option<[u8; 3]>, width: f32) -> Self {
        let b = CellBorder::visible(color, width);
        Self {
            top: b,
            bottom: b,
            left: b,
            right: b,
            inside_h: b,
            inside_v: b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMargins {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Default for CellMargins {
    fn default() -> Self {
        Self {
            top: 0.0,
            left: 108.0,
            bottom: 0.0,
            right: 108.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    Fixed,
    Autofit,
}

/// Table-level formatting. Every field is optional: `None` means the
/// feature was not requested and nothing is written for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub style_id: Option<String>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub width: Option<f32>,
    pub alignment: Option<Alignment>,
    pub borders: Option<TableBorders>,
    pub cell_margins: Option<CellMargins>,
    pub layout: Option<TableLayout>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub style: Option<TableStyle>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowStyle {
    pub height_exact: bool,
    pub header: bool,
    pub cant_split: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub style: Option<RowStyle>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub borders: Option<CellBorders>,
    pub shading: Option<[u8; 3]>,
    pub v_merge: VMerge,
    pub v_align: Option<CellVAlign>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub content: Vec<Paragraph>,
    #[serde(default)]
    pub style: Option<CellStyle>,
}

impl TableCell {
    pub fn with_width(width: f32) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}
