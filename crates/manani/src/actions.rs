//! Click actions for the product cards and the hero call-to-action.
//!
//! Neither action touches real cart or navigation state; they only report to
//! the user through the [`Host`].

use crate::catalog::{Product, ProductId};

pub const SHOP_NOW_LOG: &str = "Shop Now button clicked! Redirecting to products...";
pub const SHOP_NOW_ALERT: &str = "Redirecting to our amazing collection!";

/// The runtime surface the page reports to: a diagnostic console and a
/// blocking user-facing dialog.
pub trait Host {
    fn log(&self, message: &str);
    fn alert(&self, message: &str);
}

/// An event whose default behavior can be suppressed.
pub trait Cancelable {
    fn prevent_default(&self);
}

/// Per-card "add to cart" action, captured by the card's click handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAdd {
    pub id: ProductId,
    pub name: String,
}

impl CartAdd {
    pub fn for_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
        }
    }

    pub fn log_line(&self) -> String {
        format!("Added \"{}\" to cart! (ID: {})", self.name, self.id)
    }

    pub fn alert_text(&self) -> String {
        format!("\"{}\" added to your cart!", self.name)
    }

    pub fn fire(&self, host: &dyn Host) {
        tracing::debug!(product_id = self.id.0, "add to cart clicked");
        host.log(&self.log_line());
        host.alert(&self.alert_text());
    }
}

/// Hero "shop now" action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopNow;

impl ShopNow {
    pub fn fire(&self, event: &dyn Cancelable, host: &dyn Host) {
        event.prevent_default();
        host.log(SHOP_NOW_LOG);
        host.alert(SHOP_NOW_ALERT);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum HostCall {
        Log(String),
        Alert(String),
    }

    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub(crate) calls: RefCell<Vec<HostCall>>,
    }

    impl RecordingHost {
        pub(crate) fn logs(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    HostCall::Log(s) => Some(s.clone()),
                    HostCall::Alert(_) => None,
                })
                .collect()
        }

        pub(crate) fn alerts(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|c| match c {
                    HostCall::Alert(s) => Some(s.clone()),
                    HostCall::Log(_) => None,
                })
                .collect()
        }
    }

    impl Host for RecordingHost {
        fn log(&self, message: &str) {
            self.calls.borrow_mut().push(HostCall::Log(message.to_string()));
        }

        fn alert(&self, message: &str) {
            self.calls
                .borrow_mut()
                .push(HostCall::Alert(message.to_string()));
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeClick {
        pub(crate) prevented: Cell<u32>,
    }

    impl Cancelable for FakeClick {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    #[test]
    fn cart_add_logs_then_alerts_once() {
        let host = RecordingHost::default();
        let action = CartAdd {
            id: ProductId(3),
            name: "Chic Skirt".to_string(),
        };
        action.fire(&host);

        assert_eq!(
            *host.calls.borrow(),
            vec![
                HostCall::Log("Added \"Chic Skirt\" to cart! (ID: 3)".to_string()),
                HostCall::Alert("\"Chic Skirt\" added to your cart!".to_string()),
            ]
        );
    }

    #[test]
    fn shop_now_suppresses_navigation() {
        let host = RecordingHost::default();
        let click = FakeClick::default();
        ShopNow.fire(&click, &host);

        assert_eq!(click.prevented.get(), 1);
        assert_eq!(host.logs(), vec![SHOP_NOW_LOG.to_string()]);
        assert_eq!(host.alerts(), vec![SHOP_NOW_ALERT.to_string()]);
    }
}
