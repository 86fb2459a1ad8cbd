use crate::topology::cache::InvalidateCache;
use crate::topology::input::KeyInput;
use crate::topology::key::{SeqKey, SetKey};
use crate::topology::rank::Relation;
use crate::topology::registry::{HyperEdgeRegistry, PathRegistry, Resolved};

fn key(labels: &[u32]) -> SetKey<u32> {
    SetKey::new(labels.iter().copied())
}

#[test]
fn resolve_distinguishes_found_missing_and_empty() {
    let mut reg = HyperEdgeRegistry::<u32, ()>::new();
    reg.insert(key(&[4]), 0, ()).unwrap();
    reg.insert(key(&[1, 4]), 3, ()).unwrap();

    assert_eq!(reg.resolve::<u32>([4, 1].into()), Resolved::Found(3, key(&[1, 4])));
    assert_eq!(reg.resolve::<u32>(KeyInput::Atomic(4)), Resolved::Found(0, key(&[4])));
    assert_eq!(reg.resolve::<u32>([2].into()), Resolved::Missing(key(&[2])));
    assert_eq!(reg.resolve::<u32>(Vec::new().into()), Resolved::<SetKey<u32>>::Empty);
}

#[test]
fn resolve_through_a_cell_object() {
    let mut reg = PathRegistry::<char, i32>::new();
    reg.insert(SeqKey::new(['x', 'y']), 7).unwrap();
    let path = SeqKey::new(['x', 'y']);
    let (rank, found) = reg.resolve::<char>(KeyInput::cell(&path)).found().unwrap();
    assert_eq!(rank, 1);
    assert_eq!(reg.get_at(rank, &found), Some(&7));
    assert!(!reg.resolve::<char>(KeyInput::cell(&path.reversed())).is_found());
}

#[test]
fn explicit_invalidation_keeps_answers_stable() {
    let mut reg = HyperEdgeRegistry::<u32, ()>::new();
    reg.insert(key(&[1, 2]), 2, ()).unwrap();
    assert_eq!(reg.rank_of(&key(&[1, 2])), Some(2));
    reg.invalidate_cache();
    assert_eq!(reg.rank_of(&key(&[1, 2])), Some(2));
    assert_eq!(reg.skeleton(0, Relation::UpEq), vec![key(&[1, 2])]);
}

#[test]
fn mutation_through_get_mut_keeps_rank() {
    let mut reg = HyperEdgeRegistry::<u32, i32>::new();
    reg.insert(key(&[5, 6]), 4, 1).unwrap();
    *reg.get_mut(&key(&[6, 5])).unwrap() += 1;
    assert_eq!(reg.get(&key(&[5, 6])), Some(&2));
    assert_eq!(reg.rank_of(&key(&[5, 6])), Some(4));
}
