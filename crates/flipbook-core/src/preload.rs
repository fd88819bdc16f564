//! Neighbouring spreads to warm up before the user turns to them.

use crate::page::Spread;

/// Image URLs of the spreads directly before and after `current`.
///
/// Duplicates are dropped, first occurrence wins. Callers recompute this when
/// the settled spread changes, not when a flip target is chosen: the target
/// is already one of these neighbours and has been warmed from the previous
/// resting position.
pub fn preload_urls(current: usize, spreads: &[Spread]) -> Vec<String> {
    let neighbours = [current.checked_sub(1), current.checked_add(1)];
    let mut urls: Vec<String> = Vec::new();
    for spread in neighbours
        .into_iter()
        .flatten()
        .filter_map(|idx| spreads.get(idx))
    {
        for page in spread.pages() {
            if !urls.iter().any(|url| url == &page.image_url) {
                urls.push(page.image_url.clone());
            }
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::spreads::build_spreads;

    fn catalog(urls: &[&str]) -> Vec<Spread> {
        let pages: Vec<Page> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| Page::new(format!("p{i}"), *url, i as i64))
            .collect();
        build_spreads(&pages)
    }

    #[test]
    fn first_spread_warms_only_the_next_pair() {
        let spreads = catalog(&["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg"]);
        assert_eq!(preload_urls(0, &spreads), vec!["1.jpg", "2.jpg"]);
    }

    #[test]
    fn middle_spread_warms_both_neighbours() {
        let spreads = catalog(&["0.jpg", "1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
        assert_eq!(
            preload_urls(1, &spreads),
            vec!["0.jpg", "3.jpg", "4.jpg"]
        );
    }

    #[test]
    fn last_spread_warms_only_the_previous_one() {
        let spreads = catalog(&["0.jpg", "1.jpg", "2.jpg", "3.jpg"]);
        assert_eq!(preload_urls(2, &spreads), vec!["1.jpg", "2.jpg"]);
    }

    #[test]
    fn shared_urls_are_listed_once() {
        let spreads = catalog(&["a.jpg", "b.jpg", "a.jpg", "c.jpg", "b.jpg"]);
        assert_eq!(preload_urls(1, &spreads), vec!["a.jpg", "c.jpg", "b.jpg"]);
    }

    #[test]
    fn out_of_range_or_empty_yields_nothing() {
        assert!(preload_urls(0, &[]).is_empty());
        let spreads = catalog(&["0.jpg"]);
        assert!(preload_urls(0, &spreads).is_empty());
        assert!(preload_urls(usize::MAX, &spreads).is_empty());
    }
}
