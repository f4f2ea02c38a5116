//! Image-leaf detection.

use crate::node::{NodeKind, PaintKind, Scene, SceneNode};

/// Whether a node should be emitted as an opaque image instead of being descended into.
///
/// True when every child is a vector, when the node itself is a childless
/// vector, or when a frame/rectangle carries an image fill.
pub fn is_image_leaf(scene: &Scene, node: &SceneNode) -> bool {
    if !node.children.is_empty() {
        if scene.children(node.id).all(|child| child.kind == NodeKind::Vector) {
            return true;
        }
    } else if node.kind == NodeKind::Vector {
        return true;
    }

    matches!(node.kind, NodeKind::Frame | NodeKind::Rectangle)
        && node.fills.iter().any(|paint| paint.kind == PaintKind::Image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> bool {
        let scene = Scene::from_json(source).unwrap();
        is_image_leaf(&scene, scene.root())
    }

    #[test]
    fn test_all_vector_children() {
        assert!(check(
            r#"{ "name": "Logo", "type": "GROUP", "children": [
                { "name": "a", "type": "VECTOR" }, { "name": "b", "type": "VECTOR" } ] }"#
        ));
    }

    #[test]
    fn test_mixed_children() {
        assert!(!check(
            r#"{ "name": "Row", "type": "FRAME", "children": [
                { "name": "a", "type": "VECTOR" }, { "name": "b", "type": "TEXT" } ] }"#
        ));
    }

    #[test]
    fn test_vector_itself() {
        assert!(check(r#"{ "name": "Line", "type": "VECTOR" }"#));
    }

    #[test]
    fn test_image_fill() {
        assert!(check(
            r#"{ "name": "Photo", "type": "RECTANGLE", "fills": [ { "type": "IMAGE" } ] }"#
        ));
    }

    #[test]
    fn test_image_fill_on_text_is_ignored() {
        assert!(!check(
            r#"{ "name": "Caption", "type": "TEXT", "fills": [ { "type": "IMAGE" } ] }"#
        ));
    }

    #[test]
    fn test_plain_frame() {
        assert!(!check(r#"{ "name": "Box", "type": "FRAME" }"#));
    }
}
