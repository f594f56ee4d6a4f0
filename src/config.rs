use gloo::console::error;
use serde::Deserialize;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    pub status_hide_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_hide_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut cfg: AppConfig =
            serde_json::from_str(json).map_err(|e| format!("app-config parse error: {e}"))?;
        cfg.api_base = cfg.api_base.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Reads `<script id="app-config" type="application/json">` if the page has one.
    pub fn load() -> Self {
        let Some(json) = config_json_from_dom() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(e);
                Self::default()
            }
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content().filter(|s| !s.trim().is_empty())
}
