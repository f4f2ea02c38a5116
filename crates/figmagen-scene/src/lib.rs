//! figmagen Scene
//!
//! The read-only input side of the generator: the design document as handed
//! over by the host, flattened into an arena addressed by [`NodeId`], plus the
//! collaborators the core consumes through narrow interfaces (style
//! extraction, image detection, size formatting) and the shared naming
//! transforms.
//!
//! # Example
//!
//! ```
//! use figmagen_scene::Scene;
//!
//! let scene = Scene::from_json(r#"{ "name": "Card", "type": "FRAME" }"#).unwrap();
//! assert_eq!(scene.root().name, "Card");
//! ```

pub mod config;
pub mod image;
pub mod naming;
pub mod node;
pub mod style;
pub mod units;

pub use config::{GenerateConfig, StyleMode};
pub use image::is_image_leaf;
pub use node::{
    AxisAlign, Color, DesignNode, LayoutMode, MainComponent, NodeId, NodeKind, Paint, PaintKind,
    Scene, SceneNode, VariantMatch,
};
pub use style::{DefaultStyleExtractor, StyleExtractor, StyleProperty, StyleRecord};
pub use units::{format_size, UnitType};

/// Error raised when the host document cannot be read as a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Scene error: invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
