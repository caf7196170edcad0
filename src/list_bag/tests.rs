use super::*;
use crate::random::seeded_rng;

/// Convenience function to create a list bag from the given items.
///
/// The last given item ends up at the front.
fn bag_of<I>(items: I) -> ListBag<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut bag = ListBag::new();
    for item in items {
        bag.add(item).unwrap();
    }
    bag
}

fn contents(bag: &ListBag<u32>) -> Vec<u32> {
    bag.iter().copied().collect()
}

/// A tile that compares by letter only so that equal tiles stay distinguishable.
#[derive(Debug, Clone, Copy)]
struct Tile {
    letter: char,
    serial: u32,
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter
    }
}

impl Item for Tile {}

#[test]
fn new_ring_is_empty() {
    let bag = <ListBag<u32>>::new();
    assert_eq!(bag.len(), 0);
    assert!(bag.is_empty());
    assert_eq!(bag.nodes.len(), 1);
    assert_eq!(bag.nodes[SENTINEL].next, SENTINEL);
    assert_eq!(bag.iter().next(), None);
}

#[test]
fn negative_capacity_fails() {
    assert_eq!(
        <ListBag<u32>>::try_with_capacity(-3).unwrap_err(),
        Error::NegativeCapacity
    );
    let bag = <ListBag<u32>>::try_with_capacity(8).unwrap();
    assert_eq!(bag.len(), 0);
}

#[test]
fn huge_capacity_fails() {
    assert_eq!(
        <ListBag<u32>>::try_with_capacity(usize::MAX).unwrap_err(),
        Error::CapacityOverflow
    );
    assert_eq!(
        <ListBag<u32>>::try_with_capacity(usize::MAX / 2).unwrap_err(),
        Error::CapacityOverflow
    );
}

#[test]
fn add_vacant_fails() {
    let mut bag = <ListBag<String>>::new();
    assert_eq!(bag.add(String::new()), Err(Error::VacantItem));
    assert!(bag.is_empty());
    assert_eq!(bag.add(String::from("kiwi")), Ok(()));
    assert_eq!(bag.len(), 1);
}

#[test]
fn add_inserts_at_the_front() {
    let bag = bag_of([1, 2, 3]);
    assert_eq!(contents(&bag), vec![3, 2, 1]);
    assert_eq!(bag.get(), Some(&3));
    assert_eq!(bag.len(), 3);
}

#[test]
fn remove_detaches_the_front() {
    let mut bag = bag_of([1, 2, 3]);
    assert_eq!(bag.remove(), Some(3));
    assert_eq!(contents(&bag), vec![2, 1]);
    assert_eq!(bag.remove(), Some(2));
    assert_eq!(bag.remove(), Some(1));
    assert_eq!(bag.remove(), None);
    assert_eq!(bag.get(), None);
    assert_eq!(bag.nodes[SENTINEL].next, SENTINEL);
}

#[test]
fn detached_nodes_are_reused() {
    let mut bag = bag_of([1, 2, 3]);
    assert_eq!(bag.nodes.len(), 4);
    for round in 0..10 {
        assert_eq!(bag.remove(), Some(3 + round));
        bag.add(4 + round).unwrap();
    }
    assert_eq!(bag.nodes.len(), 4);
    assert_eq!(contents(&bag), vec![13, 2, 1]);
}

#[test]
fn remove_item_takes_the_first_occurrence() {
    let mut bag = <ListBag<Tile>>::new();
    for (serial, letter) in "ABAB".chars().enumerate() {
        bag.add(Tile {
            letter,
            serial: serial as u32,
        })
        .unwrap();
    }
    // Front to back: B3 A2 B1 A0
    let probe = Tile {
        letter: 'A',
        serial: u32::MAX,
    };
    assert!(bag.remove_item(&probe));
    let serials = bag.iter().map(|tile| tile.serial).collect::<Vec<_>>();
    assert_eq!(serials, vec![3, 1, 0]);
}

#[test]
fn remove_item_at_front_middle_and_back() {
    let mut bag = bag_of([1, 2, 3, 4, 5]);
    assert!(bag.remove_item(&5));
    assert_eq!(contents(&bag), vec![4, 3, 2, 1]);
    assert!(bag.remove_item(&3));
    assert_eq!(contents(&bag), vec![4, 2, 1]);
    assert!(bag.remove_item(&1));
    assert_eq!(contents(&bag), vec![4, 2]);
    assert!(!bag.remove_item(&1));
    assert_eq!(bag.len(), 2);
    bag.add(6).unwrap();
    assert_eq!(contents(&bag), vec![6, 4, 2]);
}

#[test]
fn remove_random_takes_the_sampled_node() {
    let mut bag = <ListBag<Tile>>::new();
    for serial in 0..8 {
        bag.add(Tile { letter: 'E', serial }).unwrap();
    }
    let mut rng = seeded_rng(77);
    for _ in 0..8 {
        let before = bag.iter().map(|tile| tile.serial).collect::<Vec<_>>();
        let steps = pick_index(&mut rng.clone(), bag.len()).unwrap();
        let taken = bag.remove_random_with(&mut rng).unwrap();
        assert_eq!(taken.serial, before[steps]);
        let mut expected = before.clone();
        expected.remove(steps);
        let after = bag.iter().map(|tile| tile.serial).collect::<Vec<_>>();
        assert_eq!(after, expected);
    }
    assert!(bag.is_empty());
    assert_eq!(bag.remove_random_with(&mut rng), None);
}

#[test]
fn get_random_does_not_mutate() {
    let mut rng = seeded_rng(3);
    let bag = bag_of([4, 5, 6]);
    for _ in 0..20 {
        let item = *bag.get_random_with(&mut rng).unwrap();
        assert!([4, 5, 6].contains(&item));
    }
    assert_eq!(contents(&bag), vec![6, 5, 4]);
}

#[test]
fn iter_reports_exact_len() {
    let mut bag = bag_of(0..5);
    assert_eq!(bag.iter().len(), 5);
    bag.remove_item(&2);
    let mut iter = bag.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
}

#[test]
fn display_goes_front_to_back() {
    assert_eq!(<ListBag<u32>>::new().to_string(), "[ ]");
    assert_eq!(bag_of([3, 1, 2]).to_string(), "[ 2 1 3 ]");
}
