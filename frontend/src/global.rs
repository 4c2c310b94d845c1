use js_sys::{Reflect, JSON};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use crate::config::{endpoint_for_subscription_deletion, CONFIG};

/// Property on `window` the rest of the page reads the config from.
pub const GLOBAL_NAME: &str = "APP_CONFIG";

#[derive(Debug, Error)]
pub enum GlobalBindingError {
    #[error("window is not available")]
    NoWindow,
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("missing config key: {0}")]
    MissingKey(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GlobalBindingError {
    fn from(value: JsValue) -> Self {
        GlobalBindingError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[wasm_bindgen]
extern "C" {
    /// The global `String` function, which converts primitives the same way a
    /// template literal does.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

fn id_to_string(id: &JsValue) -> String {
    id.as_string().unwrap_or_else(|| js_string(id))
}

#[wasm_bindgen(js_name = endpointForSubscriptionDeletion)]
pub fn endpoint_for_subscription_deletion_js(id: JsValue) -> String {
    endpoint_for_subscription_deletion(&id_to_string(&id))
}

fn get_path(root: &JsValue, path: &[&'static str]) -> Result<JsValue, GlobalBindingError> {
    path.iter().try_fold(root.clone(), |node, key| {
        let next = Reflect::get(&node, &JsValue::from_str(key))?;
        if next.is_undefined() {
            Err(GlobalBindingError::MissingKey(key))
        } else {
            Ok(next)
        }
    })
}

/// Builds the config as a plain JS object with `subscriptions.delete` attached.
pub fn build() -> Result<JsValue, GlobalBindingError> {
    let config = JSON::parse(&CONFIG.to_json()?)?;
    let subscriptions = get_path(&config, &["api", "endpoints", "subscriptions"])?;

    let delete = Closure::wrap(Box::new(move |id: JsValue| {
        endpoint_for_subscription_deletion(&id_to_string(&id))
    }) as Box<dyn Fn(JsValue) -> String>).into_js_value();

    Reflect::set(&subscriptions, &JsValue::from_str("delete"), &delete)?;
    Ok(config)
}

/// Publishes the config as `window.APP_CONFIG`.
pub fn install() -> Result<JsValue, GlobalBindingError> {
    let window = web_sys::window().ok_or(GlobalBindingError::NoWindow)?;
    let config = build()?;
    Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &config)?;
    Ok(config)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use js_sys::Function;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn call_delete(config: &JsValue, id: JsValue) -> JsValue {
        let subscriptions = get_path(config, &["api", "endpoints", "subscriptions"]).unwrap();
        let delete: Function = Reflect::get(&subscriptions, &JsValue::from_str("delete"))
            .unwrap()
            .dyn_into()
            .unwrap();
        delete.call1(&subscriptions, &id).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_install_sets_window_global() {
        install().unwrap();
        let window = web_sys::window().unwrap();
        let config = Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).unwrap();

        let base_url = get_path(&config, &["api", "baseUrl"]).unwrap();
        assert_eq!(base_url.as_string().unwrap(), "http://localhost:8080/api");
        let name = get_path(&config, &["service", "name"]).unwrap();
        assert_eq!(name.as_string().unwrap(), "FeedPing");
        let length = get_path(&config, &["validation", "verificationCode", "length"]).unwrap();
        assert_eq!(length.as_f64(), Some(6.0));

        assert_eq!(call_delete(&config, JsValue::from_f64(7.0)).as_string().unwrap(), "/subscriptions/manage/7");
        assert_eq!(call_delete(&config, JsValue::from_str("")).as_string().unwrap(), "/subscriptions/manage/");
    }

    #[wasm_bindgen_test]
    fn test_delete_attached_to_subscriptions() {
        let config = build().unwrap();
        let subscriptions = get_path(&config, &["api", "endpoints", "subscriptions"]).unwrap();
        let delete = Reflect::get(&subscriptions, &JsValue::from_str("delete")).unwrap();
        assert!(delete.is_function());
        let manage = Reflect::get(&subscriptions, &JsValue::from_str("manage")).unwrap();
        assert_eq!(manage.as_string().unwrap(), "/subscriptions/manage");
        assert_eq!(call_delete(&config, JsValue::from_str("abc")).as_string().unwrap(), "/subscriptions/manage/abc");
    }

    #[wasm_bindgen_test]
    fn test_id_conversion_matches_template_literal() {
        let cases = [
            (JsValue::from_f64(42.0), "42"),
            (JsValue::from_f64(f64::INFINITY), "Infinity"),
            (JsValue::from_f64(-0.0), "0"),
            (JsValue::from_f64(1e21), "1e+21"),
            (JsValue::from_f64(1e-7), "1e-7"),
            (JsValue::from_f64(1.5), "1.5"),
            (JsValue::from_bool(true), "true"),
            (JsValue::NULL, "null"),
            (JsValue::UNDEFINED, "undefined"),
        ];
        for (id, text) in cases {
            assert_eq!(endpoint_for_subscription_deletion_js(id), format!("/subscriptions/manage/{}", text));
        }
    }

    #[wasm_bindgen_test]
    fn test_missing_key() {
        let empty = js_sys::Object::new();
        assert!(matches!(get_path(&empty, &["api"]), Err(GlobalBindingError::MissingKey("api"))));
    }
}
