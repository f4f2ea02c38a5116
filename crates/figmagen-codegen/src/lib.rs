//! figmagen Code Generator
//!
//! Turns a classified [`Tag`] tree into two outputs: a React function
//! component and the stylesheet for the class names it references.
//!
//! ```text
//! Scene → build_tag_tree() → Tag → render() → Output { code, css }
//! ```

pub mod css;
pub mod hoist;
pub mod jsx;

use figmagen_scene::{GenerateConfig, Scene};
use figmagen_tree::{build_tag_tree, Tag};
use tracing::debug;

/// The generated component source and its stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub code: String,
    pub css: String,
}

/// Generate code and css for a whole scene. An invisible root yields empty output.
pub fn generate(scene: &Scene, config: GenerateConfig) -> Output {
    match build_tag_tree(scene, config) {
        Some(root) => render(&root, config),
        None => {
            debug!(name = %scene.root().name, "root is invisible, nothing to generate");
            Output::default()
        }
    }
}

/// Render an already-built tree, e.g. one produced by a customized
/// [`TreeBuilder`](figmagen_tree::TreeBuilder).
pub fn render(root: &Tag, config: GenerateConfig) -> Output {
    let mut root = root.clone();
    css::disambiguate(&mut root, config.style_mode);
    let root = &root;
    let variables = hoist::collect(root);
    let code = jsx::component(root, &variables, config.style_mode);
    let css = css::stylesheet(root, config.style_mode);
    debug!(
        name = %root.name,
        variables = variables.len(),
        code_len = code.len(),
        css_len = css.len(),
        "generated component"
    );
    Output { code, css }
}
