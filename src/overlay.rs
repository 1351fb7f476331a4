//! DOM overlay kept in step with the controller: loading screen, section
//! navigation (dots on desktop, progress bar on mobile), scroll hint and the
//! current section's subtitle.
//!
//! Every element is optional; a page that omits one simply doesn't get it.

use crate::constants::*;
use crate::dom;
use crate::events::EventListener;
use crate::layout;
use scrollcam_core::{DeviceClass, SectionCatalog, UiSnapshot};
use std::rc::Rc;
use web_sys as web;

struct SectionText {
    label: String,
    short_label: String,
    subtitle: String,
}

pub struct OverlaySync {
    document: web::Document,
    sections: Vec<SectionText>,
    _nav_listeners: Vec<EventListener>,
    device: Option<DeviceClass>,
    section: Option<usize>,
    ready: bool,
    hint_visible: Option<bool>,
    bar_progress: Option<f32>,
}

impl OverlaySync {
    /// Build the navigation buttons and hook their clicks to `on_select`.
    pub fn new(
        document: web::Document,
        catalog: &SectionCatalog,
        on_select: Rc<dyn Fn(usize)>,
    ) -> Self {
        let sections: Vec<SectionText> = catalog
            .iter()
            .map(|w| SectionText {
                label: w.label.clone(),
                short_label: w.short_label().to_string(),
                subtitle: w.subtitle.clone().unwrap_or_default(),
            })
            .collect();

        let mut listeners = Vec::new();
        let navs = [
            (SECTION_NAV_ID, SECTION_NAV_ITEM_PREFIX, false),
            (MOBILE_NAV_LABELS_ID, MOBILE_NAV_ITEM_PREFIX, true),
        ];
        for (container_id, prefix, short) in navs {
            let Some(container) = document.get_element_by_id(container_id) else {
                continue;
            };
            container.set_inner_html("");
            for (i, s) in sections.iter().enumerate() {
                let text = if short { &s.short_label } else { &s.label };
                listeners.extend(build_nav_item(
                    &document, &container, prefix, i, text, &on_select,
                ));
            }
        }

        dom::set_visible(&document, LOADING_OVERLAY_ID, true);
        Self {
            document,
            sections,
            _nav_listeners: listeners,
            device: None,
            section: None,
            ready: false,
            hint_visible: None,
            bar_progress: None,
        }
    }

    /// Apply one frame's snapshot. Only writes what changed.
    pub fn sync(&mut self, snap: &UiSnapshot, section_change: Option<usize>) {
        if snap.is_ready && !self.ready {
            self.ready = true;
            dom::set_visible(&self.document, LOADING_OVERLAY_ID, false);
        }

        if self.device != Some(snap.device) {
            self.device = Some(snap.device);
            let mobile = snap.device.is_mobile();
            dom::set_visible(&self.document, SECTION_NAV_ID, !mobile);
            dom::set_visible(&self.document, MOBILE_NAV_ID, mobile);
            dom::set_text(&self.document, SCROLL_HINT_ID, layout::scroll_hint_text(mobile));
            // the hint element's style was just rewritten
            self.hint_visible = None;
        }

        if self.hint_visible != Some(snap.show_scroll_hint) {
            self.hint_visible = Some(snap.show_scroll_hint);
            dom::set_visible(&self.document, SCROLL_HINT_ID, snap.show_scroll_hint);
        }

        if section_change.is_some() || self.section.is_none() {
            self.set_active_section(snap.current_section);
        }

        if layout::progress_bar_needs_update(self.bar_progress, snap.progress) {
            self.bar_progress = Some(snap.progress);
            if let Some(el) = self.document.get_element_by_id(PROGRESS_FILL_ID) {
                _ = el.set_attribute("style", &layout::progress_fill_style(snap.progress));
            }
        }
    }

    fn set_active_section(&mut self, section: usize) {
        let previous = self.section.replace(section);
        for prefix in [SECTION_NAV_ITEM_PREFIX, MOBILE_NAV_ITEM_PREFIX] {
            if let Some(prev) = previous {
                self.set_item_class(prefix, prev, false);
            }
            self.set_item_class(prefix, section, true);
        }
        if let Some(s) = self.sections.get(section) {
            dom::set_text(&self.document, SECTION_SUBTITLE_ID, &s.subtitle);
        }
    }

    fn set_item_class(&self, prefix: &str, index: usize, active: bool) {
        let id = layout::nav_item_id(prefix, index);
        if let Some(el) = self.document.get_element_by_id(&id) {
            el.set_class_name(&layout::nav_item_class(active));
        }
    }
}

fn build_nav_item(
    document: &web::Document,
    container: &web::Element,
    prefix: &str,
    index: usize,
    text: &str,
    on_select: &Rc<dyn Fn(usize)>,
) -> Option<EventListener> {
    let el = document.create_element("button").ok()?;
    el.set_id(&layout::nav_item_id(prefix, index));
    el.set_class_name(&layout::nav_item_class(false));
    el.set_text_content(Some(text));
    _ = el.set_attribute("type", "button");
    if let Err(e) = container.append_child(&el) {
        log::warn!("[overlay] append nav item {} failed: {:?}", index, e);
        return None;
    }
    let select = on_select.clone();
    EventListener::new(el.as_ref(), "click", move |_ev| select(index))
}
