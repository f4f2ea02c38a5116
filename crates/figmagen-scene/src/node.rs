//! Scene graph model.
//!
//! [`DesignNode`] is the nested document exactly as the host serializes it.
//! [`Scene`] flattens it into an arena of [`SceneNode`]s so later stages can
//! hold a cheap, non-owning [`NodeId`] instead of a reference into the tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SceneError;

// ---------------------------------------------------------------------------
// Host document
// ---------------------------------------------------------------------------

/// One node of the design document, as received from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<DesignNode>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub item_spacing: f64,
    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub primary_axis_align_items: Option<AxisAlign>,
    #[serde(default)]
    pub counter_axis_align_items: Option<AxisAlign>,
    #[serde(default)]
    pub variant_properties: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub main_component: Option<MainComponent>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_weight: Option<f64>,
    #[serde(default)]
    pub text_align_horizontal: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Node type as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Instance,
    Component,
    ComponentSet,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Line,
    Polygon,
    Star,
    BooleanOperation,
    #[serde(other)]
    Other,
}

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Alignment of auto-layout children along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    Image,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    #[serde(other)]
    Other,
}

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// The definition an instance node was created from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainComponent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Handle to a node inside a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Outcome of comparing a discrete design-variant field against an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantMatch {
    /// The node has no such variant field.
    Absent,
    /// The field exists but holds another value.
    Mismatch,
    Match,
}

impl VariantMatch {
    pub fn is_match(self) -> bool {
        self == VariantMatch::Match
    }
}

/// A flattened scene node. Children are referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub host_id: Option<String>,
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    pub children: Vec<NodeId>,
    pub characters: Option<String>,
    pub fills: Vec<Paint>,
    pub layout_mode: LayoutMode,
    pub item_spacing: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub primary_axis_align_items: Option<AxisAlign>,
    pub counter_axis_align_items: Option<AxisAlign>,
    pub variant_properties: Option<IndexMap<String, String>>,
    pub main_component: Option<MainComponent>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub corner_radius: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub text_align_horizontal: Option<String>,
}

impl SceneNode {
    /// Value of a design-variant field, if the node has one.
    pub fn variant(&self, key: &str) -> Option<&str> {
        self.variant_properties
            .as_ref()
            .and_then(|props| props.get(key))
            .map(String::as_str)
    }

    pub fn has_variants(&self) -> bool {
        self.variant_properties.is_some()
    }

    pub fn variant_is(&self, key: &str, expected: &str) -> VariantMatch {
        match self.variant(key) {
            None => VariantMatch::Absent,
            Some(value) if value == expected => VariantMatch::Match,
            Some(_) => VariantMatch::Mismatch,
        }
    }

    /// Free-text description of the main component this node instantiates.
    pub fn annotation(&self) -> Option<&str> {
        self.main_component
            .as_ref()
            .and_then(|c| c.description.as_deref())
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn has_auto_layout(&self) -> bool {
        matches!(self.layout_mode, LayoutMode::Horizontal | LayoutMode::Vertical)
    }
}

/// The whole design document, flattened in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    root: NodeId,
}

impl Scene {
    pub fn new(root: DesignNode) -> Self {
        let mut scene = Scene {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        scene.root = scene.insert(root);
        scene
    }

    pub fn from_json(source: &str) -> Result<Self, SceneError> {
        let root: DesignNode = serde_json::from_str(source)?;
        Ok(Self::new(root))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, SceneError> {
        let root: DesignNode = serde_json::from_value(value)?;
        Ok(Self::new(root))
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &SceneNode {
        self.node(self.root)
    }

    /// Ids are only minted by the scene itself, so lookups cannot miss.
    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> + '_ {
        self.node(id).children.iter().map(move |child| self.node(*child))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, node: DesignNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        let DesignNode {
            id: host_id,
            name,
            kind,
            visible,
            children,
            characters,
            fills,
            layout_mode,
            item_spacing,
            padding_left,
            padding_right,
            padding_top,
            padding_bottom,
            primary_axis_align_items,
            counter_axis_align_items,
            variant_properties,
            main_component,
            width,
            height,
            corner_radius,
            opacity,
            font_size,
            font_weight,
            text_align_horizontal,
        } = node;

        self.nodes.push(SceneNode {
            id,
            host_id,
            name,
            kind,
            visible,
            children: Vec::new(),
            characters,
            fills,
            layout_mode,
            item_spacing,
            padding_left,
            padding_right,
            padding_top,
            padding_bottom,
            primary_axis_align_items,
            counter_axis_align_items,
            variant_properties,
            main_component,
            width,
            height,
            corner_radius,
            opacity,
            font_size,
            font_weight,
            text_align_horizontal,
        });

        let child_ids: Vec<NodeId> = children.into_iter().map(|c| self.insert(c)).collect();
        self.nodes[id.0].children = child_ids;
        id
    }
}
