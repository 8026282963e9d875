//! BSP tree navigation utilities for interactive visualization.

use macroquad::prelude::*;
use segment_bsp::{BspNode, BspTree};

use crate::{draw_segment, draw_splitting_line, segment_color, Viewport};

/// Direction taken at each node in the navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Back,
    Front,
}

/// Interactive BSP tree navigator for exploring tree structure.
#[derive(Debug, Default)]
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to navigate to the back child. Returns true if successful.
    pub fn go_back(&mut self, tree: &BspTree) -> bool {
        self.descend(tree, Direction::Back)
    }

    /// Attempts to navigate to the front child. Returns true if successful.
    pub fn go_front(&mut self, tree: &BspTree) -> bool {
        self.descend(tree, Direction::Front)
    }

    fn descend(&mut self, tree: &BspTree, direction: Direction) -> bool {
        let has_child = self.current_node(tree).is_some_and(|node| match direction {
            Direction::Back => node.back().is_some(),
            Direction::Front => node.front().is_some(),
        });
        if has_child {
            self.path.push(direction);
        }
        has_child
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update(&mut self, tree: &BspTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::B) {
            changed = self.go_back(tree);
        }
        if is_key_pressed(KeyCode::F) {
            changed = self.go_front(tree);
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::R) && !self.path.is_empty() {
            self.go_root();
            changed = true;
        }

        changed
    }

    /// Returns a reference to the current node, if the tree is non-empty.
    pub fn current_node<'a>(&self, tree: &'a BspTree) -> Option<&'a BspNode> {
        tree.root().and_then(|root| get_node_at_path(root, &self.path))
    }

    /// Draws the whole tree dimmed, then the current subtree in color with
    /// its splitting line on top.
    pub fn render(&self, tree: &BspTree, viewport: &Viewport) {
        for segment in tree.collect_segments() {
            draw_segment(&segment, viewport, 2.0, DARKGRAY);
        }

        let Some(node) = self.current_node(tree) else {
            return;
        };
        draw_splitting_line(node.splitter(), viewport, Color::from_rgba(255, 255, 255, 60));
        render_subtree(node, viewport);
        for segment in node.segments() {
            draw_segment(segment, viewport, 5.0, YELLOW);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui(&self, tree: &BspTree, y_offset: f32) {
        let (subtree_segments, node_segments, has_back, has_front, is_leaf) =
            match self.current_node(tree) {
                Some(node) => (
                    node.segment_count(),
                    node.segments().len(),
                    node.back().is_some(),
                    node.front().is_some(),
                    node.is_leaf(),
                ),
                None => (0, 0, false, false, true),
            };

        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|d| match d {
                    Direction::Back => "B",
                    Direction::Front => "F",
                })
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        draw_text(
            &format!("Subtree: {} segments | Node: {} collinear", subtree_segments, node_segments),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, self.path.len()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Children: {}{}{}",
                if has_back { "[B]ack " } else { "" },
                if has_front { "[F]ront " } else { "" },
                if is_leaf { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 40.0,
            18.0,
            if is_leaf { ORANGE } else { GREEN },
        );
        draw_text("[P]arent | [R]oot", 10.0, y_offset + 60.0, 16.0, DARKGRAY);
    }
}

/// Navigates to a node following the path, returns None if path is invalid.
fn get_node_at_path<'a>(root: &'a BspNode, path: &[Direction]) -> Option<&'a BspNode> {
    let mut current = root;
    for dir in path {
        current = match dir {
            Direction::Back => current.back()?,
            Direction::Front => current.front()?,
        };
    }
    Some(current)
}

/// Draws every segment in a subtree with its own color.
fn render_subtree(node: &BspNode, viewport: &Viewport) {
    for segment in node.segments() {
        draw_segment(segment, viewport, 3.0, segment_color(segment));
    }
    if let Some(back) = node.back() {
        render_subtree(back, viewport);
    }
    if let Some(front) = node.front() {
        render_subtree(front, viewport);
    }
}
