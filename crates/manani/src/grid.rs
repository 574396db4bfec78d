//! Product grid rendering.

use crate::card::CardView;
use crate::catalog::Catalog;
use crate::error::Result;

pub const GRID_CLASS: &str = "product-grid";

/// A container that product cards are rendered into.
pub trait GridContainer {
    /// Removes everything currently in the container, including any
    /// placeholder markup the page shipped with.
    fn clear(&mut self) -> Result<()>;

    /// Appends one card and wires its add-to-cart control to `card.action`.
    fn append_card(&mut self, card: &CardView) -> Result<()>;
}

/// Clears `container` and appends one card per product, in catalog order.
///
/// Returns the number of cards appended.
pub fn render_products<C: GridContainer + ?Sized>(
    catalog: &Catalog,
    container: &mut C,
) -> Result<usize> {
    container.clear()?;
    let mut n = 0usize;
    for product in catalog {
        container.append_card(&CardView::from(product))?;
        n += 1;
    }
    tracing::debug!(cards = n, "rendered product grid");
    Ok(n)
}

/// In-memory grid that serializes to static HTML.
#[derive(Debug, Default, Clone)]
pub struct HtmlGrid {
    cards: Vec<CardView>,
}

impl HtmlGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards only, without the surrounding grid element.
    pub fn inner_html(&self) -> String {
        self.cards.iter().map(CardView::to_html).collect::<Vec<_>>().join("\n")
    }

    /// The full `<div class="product-grid">` fragment.
    pub fn to_html(&self) -> String {
        let inner = self.inner_html();
        if inner.is_empty() {
            format!("<div class=\"{GRID_CLASS}\"></div>\n")
        } else {
            format!("<div class=\"{GRID_CLASS}\">\n{inner}\n</div>\n")
        }
    }
}

impl GridContainer for HtmlGrid {
    fn clear(&mut self) -> Result<()> {
        self.cards.clear();
        Ok(())
    }

    fn append_card(&mut self, card: &CardView) -> Result<()> {
        self.cards.push(card.clone());
        Ok(())
    }
}
