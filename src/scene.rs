use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::element::{ElementId, ElementProvider};
use crate::geometry::{Overflow, OverflowStyle, Point, Rect};

/// One element snapshot in a scene: geometry in viewport coordinates plus
/// the style bits the reactor inspects.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneElement {
    pub id: u64,
    pub rect: Rect,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub overflow: Overflow,
    #[serde(default)]
    pub overflow_x: Overflow,
    #[serde(default)]
    pub overflow_y: Overflow,
    #[serde(default)]
    pub scroll: Point,
}

/// A static element tree implementing `ElementProvider`. Not a live DOM:
/// every query answers from the snapshot it was built with.
#[derive(Debug, Default)]
pub struct Scene {
    elements: HashMap<ElementId, SceneElement>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: SceneElement) {
        self.elements.insert(ElementId(element.id), element);
    }

    pub fn contains(&self, el: ElementId) -> bool {
        self.elements.contains_key(&el)
    }

    /// Highest ancestor reachable from `el`; used as the default root when
    /// a scene file names none. Bounded by the element count so malformed
    /// parent cycles cannot spin forever.
    pub fn topmost_ancestor(&self, el: ElementId) -> ElementId {
        let mut current = el;
        for _ in 0..self.elements.len() {
            match self.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }
}

impl ElementProvider for Scene {
    fn bounding_rect(&self, el: ElementId) -> Option<Rect> {
        self.elements.get(&el).map(|element| element.rect)
    }

    fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.elements
            .get(&el)
            .and_then(|element| element.parent)
            .map(ElementId)
    }

    fn overflow(&self, el: ElementId) -> OverflowStyle {
        self.elements
            .get(&el)
            .map(|element| OverflowStyle {
                overflow: element.overflow,
                overflow_x: element.overflow_x,
                overflow_y: element.overflow_y,
            })
            .unwrap_or_default()
    }

    fn scroll_offset(&self, el: ElementId) -> Point {
        self.elements
            .get(&el)
            .map(|element| element.scroll)
            .unwrap_or_default()
    }
}

/// On-disk scene: the element list plus which elements play which role.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    pub elements: Vec<SceneElement>,
    pub reference: u64,
    pub overlay: u64,
    #[serde(default)]
    pub container: Option<u64>,
    #[serde(default)]
    pub root: Option<u64>,
}

/// A parsed scene with its roles resolved to handles.
#[derive(Debug)]
pub struct LoadedScene {
    pub scene: Scene,
    pub reference: ElementId,
    pub overlay: ElementId,
    pub container: Option<ElementId>,
    pub root: ElementId,
}

impl LoadedScene {
    pub fn from_file(file: SceneFile) -> Self {
        let mut scene = Scene::new();
        for element in file.elements {
            scene.insert(element);
        }
        let reference = ElementId(file.reference);
        let root = file
            .root
            .map(ElementId)
            .unwrap_or_else(|| scene.topmost_ancestor(reference));
        LoadedScene {
            scene,
            reference,
            overlay: ElementId(file.overlay),
            container: file.container.map(ElementId),
            root,
        }
    }
}

/// Parse scene text as JSON, falling back to JSON5 for hand-written files.
pub fn parse_scene(contents: &str) -> anyhow::Result<LoadedScene> {
    let file: SceneFile = match serde_json::from_str(contents) {
        Ok(file) => file,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| anyhow::anyhow!("failed to parse scene: {json_err}"))?,
    };
    Ok(LoadedScene::from_file(file))
}

pub fn load_scene(path: &Path) -> anyhow::Result<LoadedScene> {
    let contents = std::fs::read_to_string(path)?;
    parse_scene(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_answers_provider_queries() {
        let mut scene = Scene::new();
        scene.insert(SceneElement {
            id: 1,
            rect: Rect::new(0.0, 0.0, 800.0, 600.0),
            parent: None,
            overflow: Overflow::Visible,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Scroll,
            scroll: Point::new(0.0, 250.0),
        });

        assert_eq!(
            scene.bounding_rect(ElementId(1)),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
        assert!(scene.overflow(ElementId(1)).any_scrollable());
        assert_eq!(scene.scroll_offset(ElementId(1)).y, 250.0);
        assert_eq!(scene.bounding_rect(ElementId(99)), None);
    }

    #[test]
    fn parse_scene_accepts_json5_and_defaults_the_root() {
        let loaded = parse_scene(
            r#"{
                // minimal hover scene
                elements: [
                    { id: 1, rect: { x: 0, y: 0, width: 800, height: 600 } },
                    { id: 2, rect: { x: 100, y: 100, width: 50, height: 20 }, parent: 1 },
                    { id: 3, rect: { x: 0, y: 0, width: 120, height: 40 }, parent: 1 },
                ],
                reference: 2,
                overlay: 3,
            }"#,
        )
        .expect("scene parses");
        assert_eq!(loaded.root, ElementId(1));
        assert_eq!(loaded.container, None);
        assert!(loaded.scene.contains(loaded.reference));
    }

    #[test]
    fn topmost_ancestor_survives_a_parent_cycle() {
        let mut scene = Scene::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        scene.insert(SceneElement {
            id: 1,
            rect,
            parent: Some(2),
            overflow: Overflow::Visible,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll: Point::default(),
        });
        scene.insert(SceneElement {
            id: 2,
            rect,
            parent: Some(1),
            overflow: Overflow::Visible,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll: Point::default(),
        });
        // Terminates; which node it lands on is unspecified.
        let _ = scene.topmost_ancestor(ElementId(1));
    }
}
