//! Browser binding: `web-sys` page access and the WASM entry point.
//!
//! Requires a browser environment; compiled only with the `hydrate` feature.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlMetaElement, HtmlSelectElement, HtmlTextAreaElement, UrlSearchParams, Window,
};

use crate::config::ClientConfig;
use crate::controller::PageController;
use crate::dom::{Display, PageHost, ids};
use crate::net::transport::FetchTransport;

type BrowserController = PageController<BrowserPage, FetchTransport>;

/// [`PageHost`] over the live document.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Content of `<meta name="{name}">`, if present.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.document
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok())
            .map(|meta| meta.content())
    }

    fn html_document(&self) -> Option<&HtmlDocument> {
        self.document.dyn_ref::<HtmlDocument>()
    }
}

impl PageHost for BrowserPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_inner_html(&self, selector: &str, html: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(el)) => {
                el.set_inner_html(html);
                true
            }
            _ => false,
        }
    }

    fn set_display(&self, id: &str, display: Display) {
        if let Some(el) = self.document.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
            let _ = el.style().set_property("display", display.as_css());
        }
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let el = self.document.get_element_by_id(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn set_field_value(&self, id: &str, value: &str) {
        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn reset_form(&self, id: &str) {
        if let Some(form) = self.document.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
            form.reset();
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn navigate(&self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            log::error!("navigation to {href} failed: {err:?}");
        }
    }

    fn cookies(&self) -> String {
        self.html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
    }

    fn set_cookie(&self, cookie: &str) {
        if let Some(doc) = self.html_document() {
            let _ = doc.set_cookie(cookie);
        }
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}

/// WASM entry point: set up logging, then mount once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(page) = BrowserPage::from_window() else {
        return;
    };
    let config = ClientConfig::from_lookup(|name| page.meta_content(name));
    let _ = console_log::init_with_level(config.log_level);

    if page.document.ready_state() == "loading" {
        let document = page.document.clone();
        let pending = std::cell::Cell::new(Some((page, config)));
        let on_ready = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some((page, config)) = pending.take() {
                mount(page, config);
            }
        });
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("failed to wait for DOMContentLoaded: {err:?}");
        }
        on_ready.forget();
    } else {
        mount(page, config);
    }
}

fn mount(page: BrowserPage, config: ClientConfig) {
    let document = page.document.clone();
    let controller = Rc::new(PageController::new(page, FetchTransport, config));
    let bindings = controller.prepare();

    if bindings.logout {
        listen(&document, ids::LOGOUT_LINK, "click", &controller, |c| async move { c.logout() });
    }
    if bindings.login_form {
        listen(&document, ids::LOGIN_FORM, "submit", &controller, |c| async move { c.submit_login().await });
    }
    if bindings.price_filter {
        listen(&document, ids::PRICE_FILTER, "change", &controller, |c| async move {
            c.change_price_filter().await;
        });
    }
    if bindings.review_form {
        listen(&document, ids::REVIEW_FORM, "submit", &controller, |c| async move { c.submit_review().await });
    }

    wasm_bindgen_futures::spawn_local(async move { controller.load_initial().await });
}

/// Attach `handler` to `event` on element `id`. Default actions (link
/// navigation, form submission) are suppressed before the handler runs.
fn listen<F, Fut>(document: &Document, id: &str, event: &str, controller: &Rc<BrowserController>, handler: F)
where
    F: Fn(Rc<BrowserController>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let controller = Rc::clone(controller);
    let suppress_default = event != "change";
    let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if suppress_default {
            ev.prevent_default();
        }
        wasm_bindgen_futures::spawn_local(handler(Rc::clone(&controller)));
    });
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    if let Err(err) = target.add_event_listener_with_callback(event, function) {
        log::error!("failed to bind {event} on #{id}: {err:?}");
    }
    callback.forget();
}
