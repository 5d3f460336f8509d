use avl_tree::tree::printer::render;
use avl_tree::AVLTree;

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> AVLTree<i32> {
        let mut tree = AVLTree::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn test_empty_tree_prints_nothing() {
        assert_eq!(build(&[]).to_string(), "");
    }

    #[test]
    fn test_single_node() {
        assert_eq!(build(&[1]).to_string(), "|--1\n");
    }

    #[test]
    fn test_rotated_triple() {
        assert_eq!(build(&[1, 2, 3]).to_string(), "|--2\n    |--3\n    L--1\n");
    }

    #[test]
    fn test_left_child_extends_prefix_with_bar() {
        let expected = "|--10\n    |--12\n    L--8\n    |   L--7\n";
        assert_eq!(build(&[10, 8, 12, 7]).to_string(), expected);
    }

    #[test]
    fn test_demo_sequence() {
        let expected = "\
|--7
    |--10
        |--12
        L--8
    L--3
    |   |--6
";
        assert_eq!(build(&[10, 8, 12, 7, 3, 6]).to_string(), expected);
    }

    #[test]
    fn test_printing_does_not_change_tree() {
        let tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        let first = tree.to_string();
        let second = format!("{}", tree);

        assert_eq!(first, second);
        assert_eq!(tree.height(), 3);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_render_matches_display() {
        let tree = build(&[10, 8, 12, 7]);
        assert_eq!(render(&tree), "|--10\n    |--12\n    L--8\n    |   L--7\n");
        assert_eq!(render(&tree), tree.to_string());
        assert_eq!(render(&build(&[])), "");
    }
}
