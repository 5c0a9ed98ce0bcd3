//! The JS host workspace.
//!
//! The host passes a plain object implementing:
//!
//! ```text
//! getActiveFile(): FileRecord | null
//! getSiblings(file: FileRecord): Array<FolderEntry>
//! openFile(file: FileRecord): void
//! getExplorerSortOrder?(): string | undefined   // optional
//! ```
//!
//! Records cross the boundary through `serde-wasm-bindgen` in the same
//! camelCase shape the core deserializes from JSON.

use js_sys::{Function, Reflect};
use neighbour_nav_core::{FileRecord, FolderEntry, SortOrder, Workspace};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{HostError, js_message};

/// [`Workspace`] backed by a JS object.
///
/// Failures are logged and treated as "nothing to navigate to".
pub struct JsWorkspace {
    host: JsValue,
}

impl JsWorkspace {
    pub fn new(host: JsValue) -> Self {
        Self { host }
    }

    fn method(&self, name: &'static str) -> Option<Function> {
        Reflect::get(&self.host, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn call(&self, name: &'static str, arg: Option<&JsValue>) -> Result<JsValue, HostError> {
        let method = self.method(name).ok_or(HostError::MissingMethod(name))?;
        let result = match arg {
            Some(arg) => method.call1(&self.host, arg),
            None => method.call0(&self.host),
        };
        result.map_err(|err| HostError::CallFailed {
            method: name,
            message: js_message(&err),
        })
    }

    fn decode<T: DeserializeOwned>(method: &'static str, value: JsValue) -> Result<T, HostError> {
        serde_wasm_bindgen::from_value(value).map_err(|err| HostError::InvalidValue {
            method,
            message: err.to_string(),
        })
    }

    fn encode<T: Serialize>(method: &'static str, value: &T) -> Result<JsValue, HostError> {
        serde_wasm_bindgen::to_value(value).map_err(|err| HostError::InvalidValue {
            method,
            message: err.to_string(),
        })
    }

    pub fn try_active_file(&self) -> Result<Option<FileRecord>, HostError> {
        let value = self.call("getActiveFile", None)?;
        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }
        Self::decode("getActiveFile", value).map(Some)
    }

    pub fn try_siblings(&self, file: &FileRecord) -> Result<Vec<FolderEntry>, HostError> {
        let arg = Self::encode("getSiblings", file)?;
        let value = self.call("getSiblings", Some(&arg))?;
        Self::decode("getSiblings", value)
    }

    pub fn try_open_file(&self, file: &FileRecord) -> Result<(), HostError> {
        let arg = Self::encode("openFile", file)?;
        self.call("openFile", Some(&arg)).map(|_| ())
    }

    /// Explorer order, if the host exposes one and it is a known value.
    pub fn try_explorer_sort_order(&self) -> Result<Option<SortOrder>, HostError> {
        const METHOD: &str = "getExplorerSortOrder";
        if self.method(METHOD).is_none() {
            return Ok(None);
        }
        let value = self.call(METHOD, None)?;
        Ok(value.as_string().and_then(|order| match order.parse::<SortOrder>() {
            Ok(order) => Some(order),
            Err(_) => {
                log::debug!("ignoring unknown explorer sort order '{}'", order);
                None
            }
        }))
    }
}

impl Workspace for JsWorkspace {
    fn active_file(&self) -> Option<FileRecord> {
        self.try_active_file().unwrap_or_else(|err| {
            log::warn!("{}", err);
            None
        })
    }

    fn siblings(&self, file: &FileRecord) -> Vec<FolderEntry> {
        self.try_siblings(file).unwrap_or_else(|err| {
            log::warn!("{}", err);
            Vec::new()
        })
    }

    fn open_file(&self, file: &FileRecord) {
        if let Err(err) = self.try_open_file(file) {
            log::warn!("{}", err);
        }
    }

    fn explorer_sort_order(&self) -> Option<SortOrder> {
        self.try_explorer_sort_order().unwrap_or_else(|err| {
            log::warn!("{}", err);
            None
        })
    }
}
