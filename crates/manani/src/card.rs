use crate::actions::CartAdd;
use crate::catalog::Product;

pub const CARD_CLASS: &str = "product-card";
pub const ADD_TO_CART_CLASS: &str = "add-to-cart-btn";
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

/// Host-independent model of one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
    pub price_label: String,
    pub action: CartAdd,
}

impl From<&Product> for CardView {
    fn from(p: &Product) -> Self {
        Self {
            image_src: p.image_url.clone(),
            image_alt: p.name.clone(),
            heading: p.name.clone(),
            price_label: p.price.label(),
            action: CartAdd::for_product(p),
        }
    }
}

impl CardView {
    /// `data-*` attributes carried by the add-to-cart button.
    ///
    /// Handlers use [`CardView::action`]; these are for styling and inspection.
    pub fn button_data_attributes(&self) -> [(&'static str, String); 2] {
        [
            ("data-product-id", self.action.id.to_string()),
            ("data-product-name", self.action.name.clone()),
        ]
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<div class=\"{CARD_CLASS}\">"));
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&self.image_src),
            escape_html(&self.image_alt)
        ));
        out.push_str(&format!("<h4>{}</h4>", escape_html(&self.heading)));
        out.push_str(&format!("<p>{}</p>", escape_html(&self.price_label)));
        out.push_str(&format!("<button class=\"{ADD_TO_CART_CLASS}\""));
        for (name, value) in self.button_data_attributes() {
            out.push_str(&format!(" {name}=\"{}\"", escape_html(&value)));
        }
        out.push_str(&format!(">{ADD_TO_CART_LABEL}</button>"));
        out.push_str("</div>");
        out
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
