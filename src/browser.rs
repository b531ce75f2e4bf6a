//! Browser bindings: web-sys [`Dom`], Chart.js renderer, and the functions
//! the templates call from `onclick` attributes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads the generated module and copies its exports onto `window`
//! so inline handlers such as `onclick="openEnrollModal(42, 'ana')"` resolve.
//! `start` runs once on load: it reads `safePanelsConfig`, sets up console
//! logging, installs one delegated click listener and one keydown listener,
//! and schedules chart bootstrap after `DOMContentLoaded`.
//!
//! All handlers share a single `Panel<BrowserDom>` held in a thread-local.
//! Errors are logged, then rethrown as JS `Error`s whose `name` is the
//! [`PanelError::error_code`].

use std::cell::RefCell;

use js_sys::{Function, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, DomStringMap, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent,
};

use crate::chart::{ChartConfig, ChartData, ChartRenderer};
use crate::config::PanelConfig;
use crate::consts::CONFIG_GLOBAL;
use crate::dom::{Display, Dom};
use crate::error::PanelError;
use crate::modal::ModalKind;
use crate::panel::Panel;
use crate::trigger::{Dataset, EditTeamTrigger, ManageMembersTrigger};

// =============================================================================
// ERRORS
// =============================================================================

impl From<PanelError> for JsValue {
    fn from(err: PanelError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.error_code());
        js_err.into()
    }
}

fn js_err(value: JsValue) -> PanelError {
    PanelError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn report(result: Result<(), PanelError>) -> Result<(), JsValue> {
    result.map_err(|err| {
        log::error!("panels: {err}");
        JsValue::from(err)
    })
}

// =============================================================================
// DOM
// =============================================================================

pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// # Errors
    ///
    /// [`PanelError::Js`] outside a browser window.
    pub fn new() -> Result<Self, PanelError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PanelError::Js("no window.document".into()))?;
        Ok(Self { document })
    }

    fn element(&self, id: &str) -> Result<Element, PanelError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PanelError::missing(id))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, PanelError> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PanelError::WrongElementKind { id: id.to_owned(), expected: "HTML element" })
    }
}

impl Dom for BrowserDom {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_display(&mut self, id: &str, display: Display) -> Result<(), PanelError> {
        self.html_element(id)?
            .style()
            .set_property("display", display.as_css())
            .map_err(js_err)
    }

    fn display(&self, id: &str) -> Result<Option<Display>, PanelError> {
        let raw = self
            .html_element(id)?
            .style()
            .get_property_value("display")
            .map_err(js_err)?;
        Ok(Display::from_css(&raw))
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), PanelError> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return Err(PanelError::WrongElementKind { id: id.to_owned(), expected: "form field" });
        }
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PanelError> {
        self.html_element(id)?.set_inner_text(text);
        Ok(())
    }

    fn set_form_action(&mut self, id: &str, url: &str) -> Result<(), PanelError> {
        let form = self
            .element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PanelError::WrongElementKind { id: id.to_owned(), expected: "form" })?;
        form.set_action(url);
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Result<String, PanelError> {
        Ok(self.element(id)?.inner_html())
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), PanelError> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }
}

impl Dataset for DomStringMap {
    fn get(&self, key: &str) -> Option<String> {
        DomStringMap::get(self, key)
    }
}

// =============================================================================
// CHART.JS
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(item: &Element, config: &JsValue) -> Result<ChartJs, JsValue>;
}

/// Hands configs to the page's global `Chart` constructor.
pub struct ChartJsRenderer<'a> {
    document: &'a Document,
}

impl ChartRenderer for ChartJsRenderer<'_> {
    fn render(&mut self, mount_id: &str, config: &ChartConfig) -> Result<(), PanelError> {
        let mount = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| PanelError::missing(mount_id))?;
        let raw = serde_json::to_string(config).map_err(PanelError::ChartData)?;
        let config = JSON::parse(&raw).map_err(js_err)?;
        // Chart.js keeps the instance on the canvas; the handle can drop.
        ChartJs::new(&mount, &config).map_err(js_err)?;
        Ok(())
    }
}

// =============================================================================
// PAGE GLOBALS
// =============================================================================

/// JSON text of the global binding `name`, or `None` if it is undefined.
///
/// Evaluated through a `Function` body so script-level `const` bindings,
/// which never become `window` properties, are visible too.
fn read_global_json(name: &str) -> Result<Option<String>, PanelError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(PanelError::Config(format!("not a global identifier: {name:?}")));
    }
    let getter = Function::new_no_args(&format!("return typeof {name} === 'undefined' ? undefined : {name};"));
    let value = getter.call0(&JsValue::NULL).map_err(js_err)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(Some(String::from(JSON::stringify(&value).map_err(js_err)?)))
}

fn read_config() -> Result<PanelConfig, PanelError> {
    match read_global_json(CONFIG_GLOBAL)? {
        Some(raw) => PanelConfig::from_json(&raw),
        None => Ok(PanelConfig::default()),
    }
}

/// Ids arrive as numbers from templates (`openEnrollModal(42, ...)`).
fn scalar_to_string(value: &JsValue) -> Result<String, PanelError> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .ok_or_else(|| PanelError::Js(format!("expected a string or number, got {value:?}")))
}

// =============================================================================
// SHARED PANEL
// =============================================================================

thread_local! {
    static PANEL: RefCell<Option<Panel<BrowserDom>>> = const { RefCell::new(None) };
}

/// Run `f` against the shared panel, creating it on first use. The borrow
/// is released before any error reaches JS.
fn with_panel<T>(f: impl FnOnce(&mut Panel<BrowserDom>) -> Result<T, PanelError>) -> Result<T, PanelError> {
    PANEL.with(|cell| {
        let mut slot = cell.borrow_mut();
        let panel = match slot.take() {
            Some(panel) => panel,
            None => Panel::new(BrowserDom::new()?, read_config()?),
        };
        f(slot.insert(panel))
    })
}

// =============================================================================
// EXPORTS
// =============================================================================

#[wasm_bindgen(js_name = openEnrollModal)]
pub fn open_enroll_modal(user_id: JsValue, username: &str) -> Result<(), JsValue> {
    report(scalar_to_string(&user_id).and_then(|id| with_panel(|p| p.open_enroll(&id, username))))
}

#[wasm_bindgen(js_name = closeEnrollModal)]
pub fn close_enroll_modal() -> Result<(), JsValue> {
    report(with_panel(|p| p.close(ModalKind::Enroll)))
}

#[wasm_bindgen(js_name = openCreateTeamModal)]
pub fn open_create_team_modal() -> Result<(), JsValue> {
    report(with_panel(Panel::open_create_team))
}

#[wasm_bindgen(js_name = closeCreateTeamModal)]
pub fn close_create_team_modal() -> Result<(), JsValue> {
    report(with_panel(|p| p.close(ModalKind::CreateTeam)))
}

#[wasm_bindgen(js_name = openEditTeamModal)]
pub fn open_edit_team_modal(button: &HtmlElement) -> Result<(), JsValue> {
    report(EditTeamTrigger::from_dataset(&button.dataset()).and_then(|t| with_panel(|p| p.open_edit_team(&t))))
}

#[wasm_bindgen(js_name = closeEditTeamModal)]
pub fn close_edit_team_modal() -> Result<(), JsValue> {
    report(with_panel(|p| p.close(ModalKind::EditTeam)))
}

#[wasm_bindgen(js_name = openManageMembersModal)]
pub fn open_manage_members_modal(button: &HtmlElement) -> Result<(), JsValue> {
    report(ManageMembersTrigger::from_dataset(&button.dataset()).and_then(|t| with_panel(|p| p.open_manage_members(&t))))
}

#[wasm_bindgen(js_name = closeManageMembersModal)]
pub fn close_manage_members_modal() -> Result<(), JsValue> {
    report(with_panel(|p| p.close(ModalKind::ManageMembers)))
}

#[wasm_bindgen(js_name = openManageModal)]
pub fn open_manage_modal(user_id: JsValue, username: &str) -> Result<(), JsValue> {
    report(scalar_to_string(&user_id).and_then(|id| with_panel(|p| p.open_manage(&id, username))))
}

#[wasm_bindgen(js_name = closeManageModal)]
pub fn close_manage_modal() -> Result<(), JsValue> {
    report(with_panel(|p| p.close(ModalKind::Manage)))
}

#[wasm_bindgen(js_name = showCourseForm)]
pub fn show_course_form() -> Result<(), JsValue> {
    report(with_panel(Panel::show_course_form))
}

#[wasm_bindgen(js_name = showPathForm)]
pub fn show_path_form() -> Result<(), JsValue> {
    report(with_panel(Panel::show_path_form))
}

/// Render dashboard charts from a chart data object.
#[wasm_bindgen(js_name = initCharts)]
pub fn init_charts(data: JsValue) -> Result<(), JsValue> {
    let raw = JSON::stringify(&data).map_err(js_err).map(String::from);
    report(raw.and_then(|raw| render_charts(&raw)))
}

fn render_charts(raw: &str) -> Result<(), PanelError> {
    let data = ChartData::from_json(raw)?;
    with_panel(|p| {
        let document = p.dom().document.clone();
        p.init_charts(&mut ChartJsRenderer { document: &document }, &data)
            .map(|_| ())
    })
}

// =============================================================================
// STARTUP
// =============================================================================

fn on_document_click(event: Event) -> Result<(), JsValue> {
    let Some(target) = event.target() else {
        return Ok(());
    };
    let Some(element) = target.dyn_ref::<Element>() else {
        return Ok(());
    };
    let target_id = element.id();
    report(with_panel(|p| p.handle_click(&target_id).map(|_| ())))
}

fn on_document_keydown(event: KeyboardEvent) -> Result<(), JsValue> {
    let key = event.key();
    report(with_panel(|p| p.handle_key(&key).map(|_| ())))
}

/// Bootstrap charts if the page defines the chart data global.
fn bootstrap_charts() -> Result<(), PanelError> {
    let name = with_panel(|p| Ok(p.config().chart_data_global.clone()))?;
    match read_global_json(&name)? {
        Some(raw) => render_charts(&raw),
        None => {
            log::debug!("chart: no {name} on page");
            Ok(())
        }
    }
}

fn on_content_loaded() -> Result<(), JsValue> {
    report(bootstrap_charts())
}

fn install_listeners(document: &Document) -> Result<(), PanelError> {
    let click = Closure::<dyn FnMut(Event) -> Result<(), JsValue>>::new(on_document_click);
    document
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
        .map_err(js_err)?;
    click.forget();

    let keydown = Closure::<dyn FnMut(KeyboardEvent) -> Result<(), JsValue>>::new(on_document_keydown);
    document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        .map_err(js_err)?;
    keydown.forget();

    if document.ready_state() == "loading" {
        let loaded = Closure::<dyn FnMut() -> Result<(), JsValue>>::new(on_content_loaded);
        document
            .add_event_listener_with_callback("DOMContentLoaded", loaded.as_ref().unchecked_ref())
            .map_err(js_err)?;
        loaded.forget();
        Ok(())
    } else {
        bootstrap_charts()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = read_config()?;
    console_log::init_with_level(config.level_filter()?).map_err(|e| PanelError::Js(e.to_string()))?;

    let dom = BrowserDom::new()?;
    let document = dom.document.clone();
    PANEL.with(|cell| *cell.borrow_mut() = Some(Panel::new(dom, config)));
    install_listeners(&document)?;
    log::info!("panels: ready");
    Ok(())
}
