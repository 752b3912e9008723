use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
};
use yew::NodeRef;

use crate::content::Section;
use crate::log::{log_event, LogLevel};
use crate::preferences::{Language, PreferenceKey, PreferenceStore, Theme};
use crate::reveal::{
    IntersectionEntry, RevealController, RevealOptions, REVEAL_CLASS, REVEAL_VISIBLE_CLASS,
};

const REVEAL_INDEX_ATTRIBUTE: &str = "data-reveal-index";
const DARK_CLASS: &str = "dark";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed preferences. Private browsing modes that deny
/// storage read as empty.
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: PreferenceKey) -> Option<String> {
        let Some(storage) = local_storage() else {
            log_event(
                LogLevel::Debug,
                "storage_unavailable",
                json!({ "op": "load", "key": key.as_str() }),
            );
            return None;
        };

        storage.get_item(key.as_str()).ok().flatten()
    }

    fn save(&self, key: PreferenceKey, value: &str) {
        let saved = local_storage()
            .map(|storage| storage.set_item(key.as_str(), value).is_ok())
            .unwrap_or(false);

        if !saved {
            log_event(
                LogLevel::Debug,
                "storage_unavailable",
                json!({ "op": "save", "key": key.as_str() }),
            );
        }
    }
}

fn document_root() -> Option<Element> {
    window()?.document()?.document_element()
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document_root() {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn apply_language(language: Language) {
    if let Some(root) = document_root() {
        let _ = root.set_attribute("lang", language.as_str());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

pub fn scroll_into_view(section: Section) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Live scroll-reveal observation for one mounted view. Dropping the handle
/// disposes it.
pub struct RevealHandle {
    controller: Rc<RefCell<RevealController<usize>>>,
    observer: Option<IntersectionObserver>,
    callback: Option<ObserverCallback>,
}

impl RevealHandle {
    pub fn dispose(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.controller.borrow_mut().dispose();
        self.callback = None;
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Observes every `.reveal` descendant present under `root` right now.
pub fn attach_reveal(root: &NodeRef, options: &RevealOptions) -> RevealHandle {
    let targets = root
        .cast::<Element>()
        .map(|root| reveal_targets(&root))
        .unwrap_or_default();
    let controller = Rc::new(RefCell::new(RevealController::attach(
        0..targets.len(),
        options,
    )));

    if let Some((observer, callback)) = observe_targets(&targets, &controller, options) {
        log_event(
            LogLevel::Debug,
            "reveal_attached",
            json!({ "targets": targets.len(), "threshold": options.threshold }),
        );
        return RevealHandle {
            controller,
            observer: Some(observer),
            callback: Some(callback),
        };
    }

    log_event(
        LogLevel::Info,
        "reveal_observer_unavailable",
        json!({ "targets": targets.len() }),
    );
    let revealed = controller.borrow_mut().reveal_all();
    for index in revealed {
        if let Some(target) = targets.get(index) {
            mark_visible(target);
        }
    }

    RevealHandle {
        controller,
        observer: None,
        callback: None,
    }
}

fn reveal_targets(root: &Element) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .enumerate()
        .map(|(index, element)| {
            let _ = element.set_attribute(REVEAL_INDEX_ATTRIBUTE, &index.to_string());
            element
        })
        .collect()
}

fn reveal_index(element: &Element) -> Option<usize> {
    element.get_attribute(REVEAL_INDEX_ATTRIBUTE)?.parse().ok()
}

fn mark_visible(element: &Element) {
    let _ = element.class_list().add_1(REVEAL_VISIBLE_CLASS);
}

fn observe_targets(
    targets: &[Element],
    controller: &Rc<RefCell<RevealController<usize>>>,
    options: &RevealOptions,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let win = window()?;
    if !Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return None;
    }

    let elements = targets.to_vec();
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<IntersectionEntry<usize>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    Some(IntersectionEntry {
                        target: reveal_index(&entry.target())?,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                })
                .collect();

            let revealed = controller.borrow_mut().handle_entries(batch);
            for index in revealed {
                if let Some(element) = elements.get(index) {
                    mark_visible(element);
                    observer.unobserve(element);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    for target in targets {
        observer.observe(target);
    }

    Some((observer, callback))
}
