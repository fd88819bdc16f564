//! Book pagination: the cover stands alone, the remaining pages are bound in
//! facing pairs, and an unpaired last page stands alone on the left.

use crate::page::{Page, PageSide, Spread};

/// Group an ordered page list into spreads.
pub fn build_spreads(pages: &[Page]) -> Vec<Spread> {
    let Some((cover, rest)) = pages.split_first() else {
        return Vec::new();
    };

    let mut spreads = Vec::with_capacity(spread_count(pages.len()));
    spreads.push(Spread::single(cover.clone(), PageSide::Right));
    for pair in rest.chunks(2) {
        match pair {
            [left, right] => spreads.push(Spread::facing(left.clone(), right.clone())),
            [last] => spreads.push(Spread::single(last.clone(), PageSide::Left)),
            _ => {}
        }
    }
    spreads
}

/// Number of spreads produced for `page_count` pages.
pub fn spread_count(page_count: usize) -> usize {
    match page_count {
        0 => 0,
        n => 1 + (n - 1).div_ceil(2),
    }
}

/// Spread index holding the page at `page_index`.
pub fn spread_containing(page_index: usize) -> usize {
    page_index.div_ceil(2)
}
