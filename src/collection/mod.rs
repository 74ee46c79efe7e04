//! Slice helpers: callback filtering, chunking and shuffling.
//!
//! Every function here leaves its input untouched and returns a new `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::collection::{chunk, filter_unique};
//!
//! let letters = ['a', 'b', 'a', 'c', 'b'];
//! let unique = filter_unique(&letters, |value, index, all| {
//!     all.iter().position(|other| other == value) == Some(index)
//! });
//! assert_eq!(unique, vec!['a', 'b', 'c']);
//!
//! let pairs = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(pairs, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use rand::Rng;

use crate::error::{ArgumentIssue, InvalidArgument};

/// Keeps the elements for which `predicate` returns `true`.
///
/// The predicate receives the element, its index and the whole slice, which
/// is enough to express "first occurrence only" and similar uniqueness rules.
pub fn filter_unique<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(*item, *index, items))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Splits `items` into consecutive chunks of `size` elements.
///
/// The final chunk holds whatever is left and may be shorter.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, InvalidArgument> {
    if size == 0 {
        return Err(InvalidArgument::new("size", ArgumentIssue::Zero));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Returns a shuffled copy of `items` using the thread-local RNG.
///
/// ```rust
/// use lazyfn::collection::shuffle;
///
/// let deck: Vec<u32> = (1..=52).collect();
/// let mut shuffled = shuffle(&deck);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Returns a copy of `items` shuffled with the Durstenfeld variant of the
/// Fisher-Yates algorithm, drawing from `rng`.
///
/// Passing a seeded generator makes the result reproducible.
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    let mut shuffled = items.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.gen_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}
