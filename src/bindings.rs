/// JS-facing wrapper the options page widgets drive
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::favicon::{FaviconResolver, ImageProbe};
use crate::record::{ColumnOrder, RejectionReason};
use crate::record_list::RecordList;
use crate::settings::{ListConfig, ListKind};

fn rejection(reason: RejectionReason) -> JsValue {
    js_sys::Error::new(&reason.to_string()).into()
}

/// `null`/`undefined` become the type's default
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    let parsed: Option<T> = serde_wasm_bindgen::from_value(value)?;
    Ok(parsed.unwrap_or_default())
}

/// A word or website list with its favicon cache
#[wasm_bindgen]
pub struct SettingsList {
    list: RecordList,
    favicons: Option<FaviconResolver<ImageProbe>>,
}

impl SettingsList {
    fn prime_favicons(&self) {
        if let Some(favicons) = &self.favicons {
            let urls = self.list.records().iter().map(|r| r.value.as_str());
            spawn_local(favicons.prime(urls));
        }
    }

    fn request_favicon(&self, url: &str) {
        if let Some(task) = self.favicons.as_ref().and_then(|favicons| favicons.request(url)) {
            spawn_local(task);
        }
    }
}

#[wasm_bindgen]
impl SettingsList {
    /// `values` is an array of strings, `config` a partial `ListConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(values: JsValue, config: JsValue) -> Result<SettingsList, JsValue> {
        let values: Vec<String> = from_js_or_default(values)?;
        let config: ListConfig = from_js_or_default(config)?;

        let favicons = (config.kind == ListKind::Websites)
            .then(|| FaviconResolver::new(ImageProbe::new(config.probe_timeout_ms)));

        let settings_list = SettingsList {
            list: RecordList::from_values(&values, config),
            favicons,
        };
        settings_list.prime_favicons();
        Ok(settings_list)
    }

    /// Returns the added `{ id, value }` record
    pub fn add(&mut self, value: &str) -> Result<JsValue, JsValue> {
        let record = self.list.add(value).map_err(rejection)?;
        self.request_favicon(value);
        Ok(serde_wasm_bindgen::to_value(&record)?)
    }

    pub fn edit(&mut self, id: u32, value: &str) -> Result<(), JsValue> {
        self.list.edit(id, value).map_err(rejection)?;
        self.request_favicon(value);
        Ok(())
    }

    pub fn delete(&mut self, id: u32) -> bool {
        self.list.delete(id)
    }

    pub fn set_list(&mut self, values: JsValue) -> Result<(), JsValue> {
        let values: Vec<String> = from_js_or_default(values)?;
        self.list.set_list(&values);
        self.prime_favicons();
        Ok(())
    }

    /// Records ordered by `ordering` (`{ column, direction }`) and filtered by `query`
    pub fn view(&self, ordering: JsValue, query: &str) -> Result<JsValue, JsValue> {
        let ordering: ColumnOrder = from_js_or_default(ordering)?;
        Ok(serde_wasm_bindgen::to_value(&self.list.view(ordering, query))?)
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.list.values())?)
    }

    pub fn export_text(&self) -> String {
        self.list.export_text()
    }

    pub fn export_filename(&self) -> String {
        self.list.config().export_filename.clone()
    }

    /// Returns false when the file held no values and the list was kept
    pub fn import_text(&mut self, content: &str) -> bool {
        let imported = self.list.import(content);
        if imported {
            self.prime_favicons();
        }
        imported
    }

    pub fn favicon_for(&self, url: &str) -> Option<String> {
        self.favicons.as_ref()?.favicon_for(url)
    }
}
