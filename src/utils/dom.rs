//! DOM操作ヘルパー
//!
//! 要素が見つからない場合はすべて None / 何もしない（ページ側の欠落は黙って無視する）。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// 最初に一致した要素（無効なセレクタも None）
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn get_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn text_of(parent: &Element, selector: &str) -> String {
    query_in(parent, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

/// インラインスタイルを設定（HtmlElement 以外は無視）
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// body のスクロールロック
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// スタイルシートを一度だけ head に追加
pub fn ensure_style(id: &str, css: &str) {
    let Some(document) = document() else {
        return;
    };
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }
}

/// 交差監視の設定
#[derive(Debug, Clone, Copy)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserveOptions {
    /// 画面下端から 50px 内側に入ってから発火
    pub const fn inset(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// 交差監視を開始する
///
/// `on_enter` は交差した要素ごとに呼ばれる。コールバックはページ寿命の間保持する。
pub fn observe_entering<F>(
    elements: &[Element],
    options: Option<ObserveOptions>,
    mut on_enter: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                if entry.is_intersecting() {
                    on_enter(&entry.target(), &observer);
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(opts) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(opts.threshold));
            init.set_root_margin(opts.root_margin);
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .ok()?;
    callback.forget();

    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}
