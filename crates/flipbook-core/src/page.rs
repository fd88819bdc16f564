//! Page descriptors and the spreads derived from them.

use serde::{Deserialize, Serialize};

/// One catalog page image, as supplied by the catalog data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub order: i64,
}

impl Page {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            alt: None,
            order,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// Which half of an open book a page occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    Left,
    Right,
}

/// A book opening: a lone page or a facing pair.
///
/// Construct through [`Spread::single`] or [`Spread::facing`] so that a
/// single spread always holds exactly one page and a facing spread holds two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    left_page: Option<Page>,
    right_page: Option<Page>,
    is_single: bool,
}

impl Spread {
    pub fn single(page: Page, side: PageSide) -> Self {
        match side {
            PageSide::Left => Self {
                left_page: Some(page),
                right_page: None,
                is_single: true,
            },
            PageSide::Right => Self {
                left_page: None,
                right_page: Some(page),
                is_single: true,
            },
        }
    }

    pub fn facing(left: Page, right: Page) -> Self {
        Self {
            left_page: Some(left),
            right_page: Some(right),
            is_single: false,
        }
    }

    pub fn left_page(&self) -> Option<&Page> {
        self.left_page.as_ref()
    }

    pub fn right_page(&self) -> Option<&Page> {
        self.right_page.as_ref()
    }

    pub fn is_single(&self) -> bool {
        self.is_single
    }

    /// Left page, or the only page of a single spread.
    pub fn leftmost(&self) -> Option<&Page> {
        self.left_page.as_ref().or(self.right_page.as_ref())
    }

    /// Right page, or the only page of a single spread.
    pub fn rightmost(&self) -> Option<&Page> {
        self.right_page.as_ref().or(self.left_page.as_ref())
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.left_page.iter().chain(self.right_page.iter())
    }
}
