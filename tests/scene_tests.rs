//! Scene Graph Tests
//!
//! Tests for:
//! - Path resolution relative to an arbitrary root
//! - Hierarchy bookkeeping (add_to_parent, attach)
//! - Transform dirty tracking and local-matrix rebuilds

use glam::{Quat, Vec3};

use animus::{Node, Scene, Transform};

// ============================================================================
// Path resolution
// ============================================================================

#[test]
fn find_by_path_walks_named_children() {
    let mut scene = Scene::new();
    let rig = scene.add_node(Node::new("rig"));
    let hips = scene.add_to_parent(Node::new("hips"), rig);
    let spine = scene.add_to_parent(Node::new("spine"), hips);
    let _arm = scene.add_to_parent(Node::new("arm"), spine);

    assert_eq!(scene.find_by_path(rig, "hips"), Some(hips));
    assert_eq!(scene.find_by_path(rig, "hips/spine"), Some(spine));
    assert_eq!(scene.find_by_path(hips, "spine"), Some(spine));
}

#[test]
fn find_by_path_empty_resolves_to_root() {
    let mut scene = Scene::new();
    let rig = scene.add_node(Node::new("rig"));
    assert_eq!(scene.find_by_path(rig, ""), Some(rig));
}

#[test]
fn find_by_path_missing_segment_is_none() {
    let mut scene = Scene::new();
    let rig = scene.add_node(Node::new("rig"));
    let _hips = scene.add_to_parent(Node::new("hips"), rig);

    assert_eq!(scene.find_by_path(rig, "tail"), None);
    assert_eq!(scene.find_by_path(rig, "hips/tail"), None);
}

#[test]
fn find_by_path_ignores_redundant_separators() {
    let mut scene = Scene::new();
    let rig = scene.add_node(Node::new("rig"));
    let hips = scene.add_to_parent(Node::new("hips"), rig);

    assert_eq!(scene.find_by_path(rig, "/hips/"), Some(hips));
}

// ============================================================================
// Hierarchy bookkeeping
// ============================================================================

#[test]
fn add_to_parent_links_both_sides() {
    let mut scene = Scene::new();
    let rig = scene.add_node(Node::new("rig"));
    let hips = scene.add_to_parent(Node::new("hips"), rig);

    assert_eq!(scene.get_node(hips).unwrap().parent(), Some(rig));
    assert_eq!(scene.get_node(rig).unwrap().children(), &[hips]);
    // Children are not root nodes
    assert_eq!(scene.root_nodes, vec![rig]);
}

#[test]
fn attach_reparents_and_unhooks_old_parent() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));
    let child = scene.add_to_parent(Node::new("child"), a);

    scene.attach(child, b);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
}

#[test]
fn attach_promoted_root_leaves_root_list() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let orphan = scene.add_node(Node::new("orphan"));

    scene.attach(orphan, parent);

    assert_eq!(scene.root_nodes, vec![parent]);
    assert_eq!(scene.get_node(orphan).unwrap().parent(), Some(parent));
}

#[test]
fn attach_to_self_is_rejected() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("node"));

    scene.attach(node, node);

    assert_eq!(scene.get_node(node).unwrap().parent(), None);
    assert_eq!(scene.root_nodes, vec![node]);
}

// ============================================================================
// Transform dirty tracking
// ============================================================================

#[test]
fn transform_rebuilds_matrix_on_change() {
    let mut transform = Transform::new();
    // First update always rebuilds
    assert!(transform.update_local_matrix());
    assert!(!transform.update_local_matrix());

    transform.position = Vec3::new(1.0, 2.0, 3.0);
    transform.rotation = Quat::from_rotation_y(0.5);
    assert!(transform.is_dirty());
    assert!(transform.update_local_matrix());

    let translation = transform.local_matrix().translation;
    assert_eq!(Vec3::from(translation), Vec3::new(1.0, 2.0, 3.0));
    assert!(!transform.is_dirty());
}

#[test]
fn mark_dirty_forces_rebuild_without_field_change() {
    let mut transform = Transform::new();
    transform.update_local_matrix();
    assert!(!transform.update_local_matrix());

    transform.mark_dirty();
    assert!(transform.is_dirty());
    assert!(transform.update_local_matrix());
}
