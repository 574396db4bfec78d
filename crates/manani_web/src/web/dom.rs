use std::rc::Rc;

use manani::card::{ADD_TO_CART_CLASS, ADD_TO_CART_LABEL, CARD_CLASS};
use manani::{CardView, Document, Error, GridContainer, Host, Result, ShopNow};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::host::DomEvent;

pub(super) struct BrowserPage {
    document: web_sys::Document,
    host: Rc<dyn Host>,
}

impl BrowserPage {
    pub(super) fn new(document: web_sys::Document, host: Rc<dyn Host>) -> Self {
        Self { document, host }
    }

    fn query(&self, selector: &str) -> Result<Option<web_sys::Element>> {
        self.document
            .query_selector(selector)
            .map_err(|_| Error::Dom(format!("query_selector failed for {selector:?}")))
    }
}

impl Document for BrowserPage {
    type Grid = DomGrid;

    fn product_grid(&self, selector: &str) -> Result<Option<DomGrid>> {
        Ok(self.query(selector)?.map(|element| DomGrid {
            document: self.document.clone(),
            element,
            host: self.host.clone(),
        }))
    }

    fn bind_hero(&self, selector: &str, action: ShopNow) -> Result<bool> {
        let Some(button) = self.query(selector)? else {
            return Ok(false);
        };

        let button = button
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| Error::Dom(format!("hero: {selector:?} is not an HTML element")))?;

        let host = self.host.clone();
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            action.fire(&DomEvent(&ev), host.as_ref());
        }) as Box<dyn FnMut(_)>);
        // `onclick` holds one handler, so a second mount replaces the first.
        button.set_onclick(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
        Ok(true)
    }
}

/// The page's product grid element.
pub(super) struct DomGrid {
    document: web_sys::Document,
    element: web_sys::Element,
    host: Rc<dyn Host>,
}

impl DomGrid {
    fn create(&self, tag: &str) -> Result<web_sys::Element> {
        self.document
            .create_element(tag)
            .map_err(|_| Error::Dom(format!("document: create_element({tag}) failed")))
    }
}

fn set_attr(el: &web_sys::Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value)
        .map_err(|_| Error::Dom(format!("element: set_attribute({name}) failed")))
}

fn append(parent: &web_sys::Element, child: &web_sys::Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| Error::Dom("node: append_child failed".to_string()))
}

impl GridContainer for DomGrid {
    fn clear(&mut self) -> Result<()> {
        self.element.set_inner_html("");
        Ok(())
    }

    fn append_card(&mut self, card: &CardView) -> Result<()> {
        let root = self.create("div")?;
        set_attr(&root, "class", CARD_CLASS)?;

        let img = self.create("img")?;
        set_attr(&img, "src", &card.image_src)?;
        set_attr(&img, "alt", &card.image_alt)?;
        append(&root, &img)?;

        let heading = self.create("h4")?;
        heading.set_text_content(Some(&card.heading));
        append(&root, &heading)?;

        let price = self.create("p")?;
        price.set_text_content(Some(&card.price_label));
        append(&root, &price)?;

        let button = self.create("button")?;
        set_attr(&button, "class", ADD_TO_CART_CLASS)?;
        for (name, value) in card.button_data_attributes() {
            set_attr(&button, name, &value)?;
        }
        button.set_text_content(Some(ADD_TO_CART_LABEL));

        let action = card.action.clone();
        let host = self.host.clone();
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            action.fire(host.as_ref());
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|_| Error::Dom("card: add_event_listener failed".to_string()))?;
        cb.forget();
        append(&root, &button)?;

        append(&self.element, &root)
    }
}
