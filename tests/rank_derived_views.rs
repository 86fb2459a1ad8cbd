use topo_views::prelude::*;

#[test]
fn path_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut reg = PathRegistry::<&str, AttrMap>::new();
    reg.insert(SeqKey::new(["a"]), AttrMap::new())?;
    reg.insert(SeqKey::new(["a", "b"]), attr_map([("w", 1)]))?;
    reg.insert(SeqKey::new(["b", "a"]), attr_map([("w", 2)]))?;

    let view = PathView::new(&reg);
    assert_eq!(view.rank_of(["a"])?, 0);
    assert_eq!(view.rank_of(["a", "b"])?, 1);
    assert_eq!(view.rank_of(["b", "a"])?, 1);
    assert_ne!(view.get(["a", "b"])?, view.get(["b", "a"])?);
    assert!(view.contains(["b", "a"]));
    assert!(!view.contains(["a", "b", "a"]));
    assert_eq!(
        view.to_string(),
        r#"PathView([("a",), ("a", "b"), ("b", "a")])"#
    );
    Ok(())
}

#[test]
fn simplex_ranks_follow_cardinality() -> Result<(), Box<dyn std::error::Error>> {
    let mut reg = SimplexRegistry::<u32, ()>::new();
    for face in [vec![0], vec![1], vec![2], vec![0, 1], vec![1, 2], vec![0, 2], vec![0, 1, 2]] {
        reg.insert(SetKey::new(face), ())?;
    }
    let view = SimplexView::new(&reg);
    for simplex in view.iter() {
        assert_eq!(view.rank_of(simplex.clone())?, simplex.cardinality() - 1);
    }
    for rank in 0..=2 {
        assert!(
            view.skeleton(rank, Relation::Equal)
                .iter()
                .all(|s| s.cardinality() == rank + 1)
        );
    }
    assert_eq!(view.shape().iter().sum::<usize>(), view.len());
    assert_eq!(view.max_dim(), Some(2));
    Ok(())
}

#[test]
fn node_view_over_a_simplicial_complex() -> Result<(), Box<dyn std::error::Error>> {
    let mut reg = SimplexRegistry::<char, i32>::new();
    reg.insert(SetKey::new(['u']), 1)?;
    reg.insert(SetKey::new(['v']), 2)?;
    reg.insert(SetKey::new(['u', 'v']), 3)?;
    let nodes = NodeView::with_config(&reg, NodeViewConfig::new(CellKind::Simplex))?;
    assert_eq!(nodes.get(KeyInput::Atomic('v'))?, &2);
    assert!(nodes.contains(['u']));
    assert!(!nodes.contains(['u', 'v']));
    assert_eq!(nodes.to_string(), "NodeView([('u',), ('v',)])");
    Ok(())
}
