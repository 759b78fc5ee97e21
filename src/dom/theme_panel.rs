//! Theme panel installation.
//!
//! DESIGN
//! ======
//! Options are read from the panel markup into a `ThemeCatalog`; groups the
//! page does not render fall back to the stock catalog so persisted values
//! still resolve. Every click commits class changes and markers first and
//! only then spawns the save requests.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Node};

use super::element::{contains, on_click, query, query_all};
use crate::config::PageConfig;
use crate::net::preference::{GlooTransport, PreferenceClient, save_and_report};
use crate::net::types::SavePreference;
use crate::notify::Notifier;
use crate::render::theme::{ThemeTargets, apply_outcome, render_markers, render_panel, toggle_listener};
use crate::theme::option::{ChoiceGroup, LayoutToggle, OptionId, PanelButton, ThemeOption};
use crate::theme::panel::{PanelClick, PanelEffect};
use crate::theme::{ThemeCatalog, ThemePanelController};
use crate::util::csrf::CookieCsrf;

pub const PANEL_SELECTOR: &str = ".ui-theme-settings";
pub const TOGGLE_BUTTON_SELECTOR: &str = ".btn-open-options";
const HEADER_SWATCH: &str = ".switch-header-cs-class";
const SIDEBAR_SWATCH: &str = ".switch-sidebar-cs-class";
const BODY_SWATCH: &str = ".switch-theme-class";
const LAYOUT_TOGGLE: &str = ".switch-container-class";
const RESTORE_BUTTON: &str = ".btn-restore-defaults";
const HEADER: &str = ".app-header";
const SIDEBAR: &str = ".app-sidebar";
const APP_ROOT: &str = ".app-container";
const VALUE_ATTR: &str = "data-class";
const DEBUG_DELAY_MS: u32 = 500;

type Client = PreferenceClient<GlooTransport, CookieCsrf>;

struct Panel {
    controller: ThemePanelController,
    options: Vec<(OptionId, Element)>,
    checkboxes: Vec<(LayoutToggle, Element)>,
    targets: ThemeTargets<Element>,
    drawer: Element,
}

impl Panel {
    fn sync_checkboxes(&self) {
        let state = self.controller.state();
        for (toggle, element) in &self.checkboxes {
            if let Some(input) = checkbox_of(element) {
                input.set_checked(state.toggle(*toggle));
            }
        }
    }
}

/// Wire the drawer, its options and the save requests.
pub fn install(document: &Document, config: &PageConfig, notifier: Option<Rc<dyn Notifier>>) {
    let Some(root) = document.document_element() else {
        return;
    };
    let Some(drawer) = query(&root, PANEL_SELECTOR) else {
        log::debug!("theme: {PANEL_SELECTOR} not found");
        return;
    };
    let Some(button) = query(&root, TOGGLE_BUTTON_SELECTOR) else {
        log::debug!("theme: {TOGGLE_BUTTON_SELECTOR} not found");
        return;
    };

    let (catalog, options, checkboxes) = read_options(&drawer);
    let catalog = catalog.with_fallback(&ThemeCatalog::standard());
    let controller = ThemePanelController::new(catalog, &config.preferences);

    let targets = ThemeTargets {
        body: document.body().map(Element::from),
        header: query(&root, HEADER),
        sidebar: query(&root, SIDEBAR),
        app_root: query(&root, APP_ROOT),
    };

    let mut panel = Panel { controller, options, checkboxes, targets, drawer: drawer.clone() };
    render_markers(panel.controller.state(), &mut panel.options);
    render_panel(panel.controller.state().panel, &mut panel.drawer);
    panel.sync_checkboxes();
    log::debug!("theme: {} options on page", panel.options.len());

    let option_elements: Vec<(OptionId, Element)> = panel.options.clone();
    let panel = Rc::new(RefCell::new(panel));
    let client = Rc::new(PreferenceClient::new(
        GlooTransport,
        CookieCsrf::new(config.csrf_cookie.clone()),
        config,
    ));

    for (id, element) in option_elements {
        let panel = Rc::clone(&panel);
        let client = Rc::clone(&client);
        let notifier = notifier.clone();
        let checkbox = checkbox_of(&element).map(Element::from);
        let is_checkbox = checkbox.is_some();
        let listener = toggle_listener(element, checkbox);
        on_click(&listener, move |event| {
            if !is_checkbox {
                event.prevent_default();
            }
            let saves = {
                let mut guard = panel.borrow_mut();
                let p = &mut *guard;
                let outcome = p.controller.click(id);
                apply_outcome(&outcome, &mut p.targets);
                render_markers(p.controller.state(), &mut p.options);
                p.sync_checkboxes();
                outcome.saves
            };
            spawn_saves(&client, notifier.as_ref(), saves);
        });
    }

    let debug = config.debug;
    on_click(document, move |event| {
        let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let click = if contains(&button, &node) {
            event.prevent_default();
            PanelClick::ToggleButton
        } else if contains(&drawer, &node) {
            PanelClick::Inside
        } else {
            PanelClick::Outside
        };

        let mut guard = panel.borrow_mut();
        let p = &mut *guard;
        let effect = p.controller.panel_click(click);
        if effect == PanelEffect::Unchanged {
            return;
        }
        render_panel(p.controller.state().panel, &mut p.drawer);
        if let PanelEffect::Closed { clear_inline_position: true } = effect {
            let _ = p.drawer.remove_attribute("style");
        }
        if debug && click == PanelClick::ToggleButton {
            let drawer = p.drawer.clone();
            gloo_timers::callback::Timeout::new(DEBUG_DELAY_MS, move || {
                log::debug!("theme: drawer classes after toggle: {:?}", drawer.class_name());
            })
            .forget();
        }
    });
}

/// Collect every option the drawer renders, in document order.
fn read_options(drawer: &Element) -> (ThemeCatalog, Vec<(OptionId, Element)>, Vec<(LayoutToggle, Element)>) {
    let mut catalog = ThemeCatalog::new();
    let mut options = Vec::new();
    let mut checkboxes = Vec::new();

    let swatches = [
        (HEADER_SWATCH, Some(ChoiceGroup::HeaderColor)),
        (SIDEBAR_SWATCH, Some(ChoiceGroup::SidebarColor)),
        (BODY_SWATCH, None),
    ];
    for (selector, fixed_group) in swatches {
        for element in query_all(drawer, selector) {
            let value = element.get_attribute(VALUE_ATTR).unwrap_or_default();
            let Some(group) = fixed_group.or_else(|| ChoiceGroup::classify_body_class(&value)) else {
                log::debug!("theme: unclassified body option {value:?}");
                continue;
            };
            options.push((catalog.push(ThemeOption::choice(group, value)), element));
        }
    }

    for element in query_all(drawer, LAYOUT_TOGGLE) {
        let value = element.get_attribute(VALUE_ATTR).unwrap_or_default();
        let Some(toggle) = LayoutToggle::from_class(&value) else {
            log::debug!("theme: unknown layout toggle {value:?}");
            continue;
        };
        options.push((catalog.push(ThemeOption::toggle(toggle)), element.clone()));
        checkboxes.push((toggle, element));
    }

    for element in query_all(drawer, RESTORE_BUTTON) {
        options.push((catalog.push(ThemeOption::button(PanelButton::RestoreDefaults)), element));
    }

    (catalog, options, checkboxes)
}

/// The checkbox behind a layout toggle: the element itself or the first one
/// inside it.
fn checkbox_of(element: &Element) -> Option<HtmlInputElement> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.clone());
    }
    query(element, "input[type=checkbox]").and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

fn spawn_saves(client: &Rc<Client>, notifier: Option<&Rc<dyn Notifier>>, saves: Vec<SavePreference>) {
    for save in saves {
        let client = Rc::clone(client);
        let notifier = notifier.cloned();
        wasm_bindgen_futures::spawn_local(async move {
            save_and_report(&*client, &save, notifier.as_deref()).await;
        });
    }
}
