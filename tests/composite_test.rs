//! Tests for the Composite tree

use rstest::rstest;

use patternbook::structural::composite::{reference_tree, CompositeTree};
use patternbook::util::testing;
use patternbook::PatternError;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// operation()
// ============================================================

#[test]
fn given_leaf_when_operation_then_returns_leaf_literal() {
    let mut tree = CompositeTree::new();
    let leaf = tree.leaf();

    assert_eq!(tree.operation(leaf).unwrap(), "Leaf");
}

#[test]
fn given_leaf_inside_tree_when_operation_then_still_leaf_literal() {
    let (tree, root) = reference_tree().unwrap();
    let branch = tree.children(root).unwrap()[0];
    let leaf = tree.children(branch).unwrap()[1];

    assert_eq!(tree.operation(leaf).unwrap(), "Leaf");
}

#[test]
fn given_empty_composite_when_operation_then_returns_empty_branch() {
    let mut tree = CompositeTree::new();
    let composite = tree.composite();

    assert_eq!(tree.operation(composite).unwrap(), "Branch()");
}

#[rstest]
#[case(1, "Branch(Leaf)")]
#[case(2, "Branch(Leaf+Leaf)")]
#[case(4, "Branch(Leaf+Leaf+Leaf+Leaf)")]
fn given_composite_of_leaves_when_operation_then_joins_with_plus(
    #[case] leaves: usize,
    #[case] expected: &str,
) {
    let mut tree = CompositeTree::new();
    let composite = tree.composite();
    for _ in 0..leaves {
        let leaf = tree.leaf();
        tree.add(composite, leaf).unwrap();
    }

    assert_eq!(tree.operation(composite).unwrap(), expected);
}

#[test]
fn given_nested_composite_and_leaf_when_operation_then_nests_results() {
    let mut tree = CompositeTree::new();
    let root = tree.composite();
    let branch = tree.composite();
    let l1 = tree.leaf();
    let l2 = tree.leaf();
    let l3 = tree.leaf();
    tree.add(branch, l1).unwrap();
    tree.add(branch, l2).unwrap();
    tree.add(root, branch).unwrap();
    tree.add(root, l3).unwrap();

    assert_eq!(tree.operation(root).unwrap(), "Branch(Branch(Leaf+Leaf)+Leaf)");
}

#[test]
fn given_reference_tree_when_operation_then_matches_expected_string() {
    let (tree, root) = reference_tree().unwrap();

    assert_eq!(
        tree.operation(root).unwrap(),
        "Branch(Branch(Leaf+Leaf)+Branch(Leaf))"
    );
}

#[test]
fn given_children_added_in_order_when_operation_then_order_is_preserved() {
    let mut tree = CompositeTree::new();
    let root = tree.composite();
    let leaf = tree.leaf();
    let empty = tree.composite();
    tree.add(root, leaf).unwrap();
    tree.add(root, empty).unwrap();

    assert_eq!(tree.operation(root).unwrap(), "Branch(Leaf+Branch())");
}

// ============================================================
// is_composite()
// ============================================================

#[test]
fn given_nodes_when_is_composite_then_depends_only_on_kind() {
    let (mut tree, root) = reference_tree().unwrap();
    let leaf = tree.leaf();
    let empty = tree.composite();

    assert!(!tree.is_composite(leaf).unwrap());
    assert!(tree.is_composite(root).unwrap());
    assert!(tree.is_composite(empty).unwrap());
}

// ============================================================
// add() / remove()
// ============================================================

#[test]
fn given_add_when_checking_parent_then_points_at_composite() {
    let mut tree = CompositeTree::new();
    let parent = tree.composite();
    let child = tree.leaf();
    assert_eq!(tree.parent(child).unwrap(), None);

    tree.add(parent, child).unwrap();

    assert_eq!(tree.parent(child).unwrap(), Some(parent));
    assert_eq!(tree.children(parent).unwrap(), &[child]);
}

#[test]
fn given_added_child_when_removed_then_parent_cleared_and_child_absent() {
    let mut tree = CompositeTree::new();
    let parent = tree.composite();
    let child = tree.leaf();
    tree.add(parent, child).unwrap();

    tree.remove(parent, child).unwrap();

    assert_eq!(tree.parent(child).unwrap(), None);
    assert!(tree.children(parent).unwrap().is_empty());
    assert_eq!(tree.operation(parent).unwrap(), "Branch()");
}

#[test]
fn given_same_child_added_twice_when_operation_then_appears_twice() {
    let mut tree = CompositeTree::new();
    let parent = tree.composite();
    let child = tree.leaf();
    tree.add(parent, child).unwrap();
    tree.add(parent, child).unwrap();

    assert_eq!(tree.children(parent).unwrap().len(), 2);
    assert_eq!(tree.operation(parent).unwrap(), "Branch(Leaf+Leaf)");

    // Only the first entry goes
    tree.remove(parent, child).unwrap();
    assert_eq!(tree.children(parent).unwrap(), &[child]);
}

#[test]
fn given_child_added_to_second_parent_when_checking_parent_then_last_write_wins() {
    let mut tree = CompositeTree::new();
    let first = tree.composite();
    let second = tree.composite();
    let child = tree.leaf();
    tree.add(first, child).unwrap();
    tree.add(second, child).unwrap();

    assert_eq!(tree.parent(child).unwrap(), Some(second));
    // Membership in the first container is untouched
    assert_eq!(tree.children(first).unwrap(), &[child]);
}

#[test]
fn given_absent_child_when_remove_then_not_found_without_side_effects() {
    let mut tree = CompositeTree::new();
    let parent = tree.composite();
    let other = tree.composite();
    let kept = tree.leaf();
    let stranger = tree.leaf();
    tree.add(parent, kept).unwrap();
    tree.add(other, stranger).unwrap();

    let result = tree.remove(parent, stranger);

    assert_eq!(
        result,
        Err(PatternError::ComponentNotFound {
            parent,
            component: stranger
        })
    );
    assert_eq!(tree.children(parent).unwrap(), &[kept]);
    assert_eq!(tree.parent(stranger).unwrap(), Some(other));
}

#[test]
fn given_leaf_parent_when_add_or_remove_then_silently_ignored() {
    let mut tree = CompositeTree::new();
    let leaf = tree.leaf();
    let child = tree.leaf();

    tree.add(leaf, child).unwrap();
    tree.remove(leaf, child).unwrap();

    assert_eq!(tree.operation(leaf).unwrap(), "Leaf");
    assert_eq!(tree.parent(child).unwrap(), None);
}

// ============================================================
// Cycle guard and unknown nodes
// ============================================================

#[test]
fn given_composite_when_added_to_itself_then_cycle_detected() {
    let mut tree = CompositeTree::new();
    let composite = tree.composite();

    assert_eq!(
        tree.add(composite, composite),
        Err(PatternError::CycleDetected(composite))
    );
    assert!(tree.children(composite).unwrap().is_empty());
}

#[test]
fn given_ancestor_when_added_under_descendant_then_cycle_detected() {
    let (mut tree, root) = reference_tree().unwrap();
    let branch = tree.children(root).unwrap()[1];

    assert_eq!(tree.add(branch, root), Err(PatternError::CycleDetected(root)));
    assert_eq!(
        tree.operation(root).unwrap(),
        "Branch(Branch(Leaf+Leaf)+Branch(Leaf))"
    );
}

#[test]
fn given_node_from_other_tree_in_same_slot_when_used_then_node_not_found() {
    // Both nodes are the first insert into a fresh arena
    let mut other = CompositeTree::new();
    let foreign = other.leaf();
    let mut tree = CompositeTree::new();
    let root = tree.composite();

    assert_ne!(foreign, root);
    assert_eq!(tree.operation(foreign), Err(PatternError::NodeNotFound(foreign)));
    assert_eq!(tree.is_composite(foreign), Err(PatternError::NodeNotFound(foreign)));
    assert_eq!(tree.add(root, foreign), Err(PatternError::NodeNotFound(foreign)));
    assert_eq!(tree.add(foreign, root), Err(PatternError::NodeNotFound(foreign)));
    assert!(tree.children(root).unwrap().is_empty());
    assert_eq!(other.operation(foreign).unwrap(), "Leaf");
}
