//! JS-facing plugin object.
//!
//! Wires the pieces together for a browser host:
//!
//! - settings are loaded from localStorage at construction and saved after
//!   every mutation
//! - `onload` attaches the swipe listener to `document.body`
//! - `runCommand` executes one of the named navigation commands
//!
//! # Example (host side)
//!
//! ```text
//! const plugin = new NavigatorPlugin(workspace);
//! plugin.onload();
//! for (const { id, name } of NavigatorPlugin.commands()) {
//!     addCommand({ id, name, callback: () => plugin.runCommand(id) });
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use neighbour_nav_core::{
    NavigationCommand, NavigationSettings, Navigator, SettingsError, SettingsStore,
    SwipeRecognizer, models::parse_extension_list,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::host::JsWorkspace;
use crate::storage::LocalStorageSettings;
use crate::touch::SwipeListener;
use crate::utils::{dom, logger};

/// Command descriptor handed to the host for registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// All commands as host descriptors.
pub fn command_infos() -> Vec<CommandInfo> {
    NavigationCommand::ALL
        .iter()
        .map(|command| CommandInfo {
            id: command.id(),
            name: command.name(),
        })
        .collect()
}

/// Apply a partial settings object over `current`.
///
/// Keys absent from `patch` keep their current value.
pub fn merge_settings(
    current: &NavigationSettings,
    patch: serde_json::Value,
) -> Result<NavigationSettings, SettingsError> {
    let serde_json::Value::Object(patch) = patch else {
        return Err(SettingsError::InvalidJson(
            "settings patch must be an object".to_string(),
        ));
    };
    let mut merged = serde_json::to_value(current).map_err(|_| SettingsError::SerializationFailed)?;
    if let serde_json::Value::Object(fields) = &mut merged {
        fields.extend(patch);
    }
    Ok(serde_json::from_value(merged)?)
}

/// The plugin instance owned by the host.
#[wasm_bindgen]
pub struct NavigatorPlugin {
    navigator: Rc<RefCell<Navigator>>,
    workspace: Rc<JsWorkspace>,
    store: LocalStorageSettings,
    listener: Option<SwipeListener>,
}

#[wasm_bindgen]
impl NavigatorPlugin {
    /// Create the plugin for a host workspace object.
    #[wasm_bindgen(constructor)]
    pub fn new(workspace: JsValue) -> NavigatorPlugin {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);

        let store = LocalStorageSettings::default();
        let settings = store.load_or_default();
        log::debug!("loaded settings: {:?}", settings);

        NavigatorPlugin {
            navigator: Rc::new(RefCell::new(Navigator::new(settings))),
            workspace: Rc::new(JsWorkspace::new(workspace)),
            store,
            listener: None,
        }
    }

    /// Start listening for two-finger swipes on `document.body`.
    pub fn onload(&mut self) -> Result<(), JsValue> {
        if self.listener.is_some() {
            return Ok(());
        }
        let target = dom::body_target().ok_or_else(|| to_js_error("document.body not available"))?;

        let navigator = Rc::clone(&self.navigator);
        let workspace = Rc::clone(&self.workspace);
        let recognizer = SwipeRecognizer::new(move |swipe| match navigator.try_borrow() {
            Ok(navigator) => {
                navigator.handle_swipe(workspace.as_ref(), swipe);
            }
            Err(_) => log::warn!("navigator busy, dropping {:?} swipe", swipe),
        });

        self.listener = Some(SwipeListener::attach(
            target,
            Rc::new(RefCell::new(recognizer)),
        )?);
        log::info!("neighbouring file navigation loaded");
        Ok(())
    }

    /// Remove the swipe listeners.
    pub fn onunload(&mut self) {
        self.listener = None;
    }

    /// Command descriptors (`{ id, name }[]`) for registration.
    pub fn commands() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&command_infos()).map_err(to_js_error)
    }

    /// Run a command by id. Returns whether a file was opened.
    #[wasm_bindgen(js_name = runCommand)]
    pub fn run_command(&self, id: &str) -> Result<bool, JsValue> {
        let command = id.parse::<NavigationCommand>().map_err(to_js_error)?;
        let opened = self
            .navigator
            .borrow()
            .run_command(self.workspace.as_ref(), command);
        Ok(opened.is_some())
    }

    /// Sort order the plain next/previous commands would use right now.
    #[wasm_bindgen(js_name = effectiveSortOrder)]
    pub fn effective_sort_order(&self) -> String {
        self.navigator
            .borrow()
            .effective_sort_order(self.workspace.as_ref())
            .to_string()
    }

    /// Current settings as a plain object.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.navigator.borrow().settings()).map_err(to_js_error)
    }

    /// Merge a partial settings object and persist the result.
    #[wasm_bindgen(js_name = updateSettings)]
    pub fn update_settings(&self, patch: JsValue) -> Result<(), JsValue> {
        let patch: serde_json::Value = serde_wasm_bindgen::from_value(patch).map_err(to_js_error)?;
        let merged = merge_settings(self.navigator.borrow().settings(), patch).map_err(to_js_error)?;
        self.navigator.borrow_mut().replace_settings(merged);
        self.persist()
    }

    /// Set the extra extensions from a comma-separated text field.
    #[wasm_bindgen(js_name = setAdditionalExtensions)]
    pub fn set_additional_extensions(&self, text: &str) -> Result<(), JsValue> {
        self.navigator
            .borrow_mut()
            .set_additional_extensions(parse_extension_list(text));
        self.persist()
    }

    /// Change the console log level ("error" through "trace").
    #[wasm_bindgen(js_name = setLogLevel)]
    pub fn set_log_level(&self, level: &str) -> Result<(), JsValue> {
        let level = logger::parse_level(level)
            .ok_or_else(|| to_js_error(format!("unknown log level '{}'", level)))?;
        logger::init(level);
        Ok(())
    }

    fn persist(&self) -> Result<(), JsValue> {
        self.store
            .save(self.navigator.borrow().settings())
            .map_err(to_js_error)
    }
}
