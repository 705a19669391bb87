//! Integration tests: laws every structure must satisfy.
//!
//! Each law is checked against all three variants where the variant
//! supports the contract involved.

use corral_core::{
    Chunkable, CollectionError, Dictionary, Enumerable, Filterable, Flow, Mergeable,
    RandomAccess, Reversible, Selectable, Sequence, SequentialAccess, Sortable, Structure,
    UniqueList,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn letters() -> Dictionary<char, u32> {
    ('a'..='j').zip(1..).collect()
}

fn numbers() -> Sequence<u32> {
    (1..=10).collect()
}

fn distinct() -> UniqueList<u32> {
    (1..=10).collect()
}

fn check_chunks<S>(target: &S, size: usize)
where
    S: Chunkable,
    S::Value: PartialEq + std::fmt::Debug,
{
    let total = target.storage().len();
    let chunks = target.chunk().by(size).unwrap();
    assert_eq!(chunks.len(), total.div_ceil(size), "chunk count for size {size}");
    assert!(chunks.iter().all(|c| c.storage().len() <= size));

    let rejoined: Vec<&S::Value> = chunks.iter().flat_map(|c| c.storage().values()).collect();
    let original: Vec<&S::Value> = target.storage().values().collect();
    assert_eq!(rejoined, original, "chunks concatenate back for size {size}");
}

#[test]
fn chunks_cover_the_input_exactly() {
    for size in 1..=12 {
        check_chunks(&letters(), size);
        check_chunks(&numbers(), size);
        check_chunks(&distinct(), size);
    }
    assert!(matches!(
        numbers().chunk().by(0),
        Err(CollectionError::InvalidArgument { name: "size", .. })
    ));
}

fn check_reverse_involution<S>(target: &S)
where
    S: Reversible + PartialEq + std::fmt::Debug,
{
    assert_eq!(&target.reverse().reverse(), target);

    let mut twice = target.reverse();
    twice.reverse_in_place();
    assert_eq!(&twice, target);
}

#[test]
fn reverse_is_an_involution() {
    check_reverse_involution(&letters());
    check_reverse_involution(&numbers());
    check_reverse_involution(&distinct());
    check_reverse_involution(&Sequence::<u32>::new());
}

fn check_filter<S>(target: &S)
where
    S: Filterable,
    S::Value: PartialOrd + From<u8>,
{
    let threshold = S::Value::from(5);
    let kept = target.filter(|value, _| *value > threshold);
    assert!(kept.storage().len() <= target.storage().len());
    assert!(kept.storage().values().all(|value| *value > threshold));
}

#[test]
fn filter_never_grows_and_satisfies_predicate() {
    check_filter(&letters());
    check_filter(&numbers());
    check_filter(&distinct());
}

#[test]
fn filter_stop_yields_the_accepted_prefix() {
    let seq = numbers();
    let prefix = seq.filter(|value, _| if *value > 3 { Flow::Stop } else { Flow::Keep });
    assert_eq!(prefix.to_vec(), [1, 2, 3]);

    let dict = letters();
    let prefix = dict.filter(|_, key| if *key == 'c' { Flow::Stop } else { Flow::Keep });
    assert_eq!(prefix.keys().to_vec(), ['a', 'b']);
}

#[test]
fn sort_is_stable() {
    let words = Sequence::from(["pear", "fig", "plum", "kiwi", "date", "lime"]);
    let by_len = words.sort().by_projection(|w| w.len());
    assert_eq!(by_len.to_vec(), ["fig", "pear", "plum", "kiwi", "date", "lime"]);

    let descending = words.sort().descending().by_projection(|w| w.len());
    assert_eq!(
        descending.to_vec(),
        ["pear", "plum", "kiwi", "date", "lime", "fig"]
    );

    let mut dict = Dictionary::from([("x", 2), ("y", 1), ("z", 2), ("w", 1)]);
    dict.sort_in_place().by_values();
    assert_eq!(dict.keys().to_vec(), ["y", "w", "x", "z"]);
}

#[test]
fn random_access_laws() {
    let mut dict = letters();
    dict.set(100, 'k');
    assert_eq!(dict.get(&'k'), Some(&100));

    let before = dict.clone();
    assert!(dict.add(0, 'a').is_err());
    assert_eq!(dict, before);

    dict.remove(&'a');
    let once = dict.clone();
    dict.remove(&'a');
    assert_eq!(dict, once);
}

#[test]
fn dictionary_scenario() {
    let dict = Dictionary::from([("a", 1), ("b", 2), ("c", 3)]);
    let kept = dict.filter(|value, _| *value > 1);
    assert_eq!(kept.keys().to_vec(), ["b", "c"]);
    assert_eq!(kept.values().to_vec(), [2, 3]);
    assert_eq!(dict.count_by().matching(|value, _| value % 2 == 1), 2);
}

#[test]
fn sequence_scenario() {
    let mut seq = Sequence::from([1, 2, 3]);
    seq.append([4, 5]);
    assert_eq!(seq.shift(1), [1]);
    assert_eq!(seq.to_vec(), [2, 3, 4, 5]);
    assert_eq!(seq.keys().to_vec(), [0, 1, 2, 3]);
}

#[test]
fn union_depends_on_the_variant() {
    let seq = Sequence::from([1, 2]).union([&Sequence::from([2, 3])]);
    assert_eq!(seq.to_vec(), [1, 2, 2, 3]);

    let unique = UniqueList::from([1, 2]).union([&UniqueList::from([2, 3])]);
    assert_eq!(unique.to_vec(), [1, 2, 3]);

    let dict = Dictionary::from([("a", 1), ("b", 2)]).union([&Dictionary::from([("b", 3)])]);
    assert_eq!(dict, Dictionary::from([("a", 1), ("b", 3)]));
}

#[test]
fn selection_complements() {
    let seq = numbers();
    let selected = seq.select().every(3).unwrap();
    let skipped = seq.skip().every(3).unwrap();
    assert_eq!(selected.to_vec(), [1, 4, 7, 10]);
    assert_eq!(selected.count() + skipped.count(), seq.count());

    let picked = seq
        .select()
        .random_with(4, &mut StdRng::seed_from_u64(11))
        .unwrap();
    assert_eq!(picked.count(), 4);
    let values = picked.to_vec();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(seq.select().random(11).is_err());
}

#[test]
fn symmetric_difference_per_variant() {
    let left = UniqueList::from([1, 2, 3]);
    let right = UniqueList::from([3, 4]);
    let diff = left.set_operation(&right).symmetric_diff_values();
    assert_eq!(diff.to_vec(), [1, 2, 4]);
}
