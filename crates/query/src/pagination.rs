//! Fixed-size pagination of a cast list.
//!
//! The page index itself comes from the selection graph's two click
//! counters (`next_clicks - prev_clicks`, floored at zero). There is
//! deliberately no upper clamp: advancing past the last page returns an
//! empty slice with no end-of-list signal, matching the reference
//! behavior. Callers wanting a clamped strategy can derive their own
//! index and still use this slicing contract.

/// Actors shown per page.
pub const ACTORS_PER_PAGE: usize = 10;

/// The half-open slice `[page_index * page_size, page_index * page_size
/// + page_size)` of `items`, clamped to the slice bounds.
///
/// An out-of-range start yields an empty slice — no error, no
/// wraparound.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = match page_index.checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = items.len().min(start + page_size);
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actors(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Actor {i:02}")).collect()
    }

    #[test]
    fn test_full_and_partial_pages() {
        let cast = actors(25);

        assert_eq!(paginate(&cast, 0, ACTORS_PER_PAGE), &cast[0..10]);
        assert_eq!(paginate(&cast, 1, ACTORS_PER_PAGE), &cast[10..20]);
        // Last page is partial
        assert_eq!(paginate(&cast, 2, ACTORS_PER_PAGE), &cast[20..25]);
    }

    #[test]
    fn test_past_the_end_is_empty() {
        let cast = actors(25);

        assert!(paginate(&cast, 3, ACTORS_PER_PAGE).is_empty());
        assert!(paginate(&cast, 1000, ACTORS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let cast: Vec<String> = Vec::new();
        assert!(paginate(&cast, 0, ACTORS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        let cast = actors(5);
        assert!(paginate(&cast, usize::MAX, ACTORS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_page_size_larger_than_input() {
        let cast = actors(3);
        assert_eq!(paginate(&cast, 0, ACTORS_PER_PAGE).len(), 3);
        assert!(paginate(&cast, 1, ACTORS_PER_PAGE).is_empty());
    }
}
