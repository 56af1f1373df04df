//! Google reCAPTCHA v2 integration.
//!
//! The widget script loads from index.html with `render=explicit`; this
//! module polls until the API object exists, renders the checkbox into a
//! mount node, and forwards issued tokens to the owner through a callback.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Public site key for the support form widget.
pub const SITE_KEY: &str = "6LcVSE8sAAAAAK4nMXZoPPuzbDBhqsRSMLxMwEOI";

/// Poll cadence while waiting for the widget script (async, may land well
/// after the app mounts).
const POLL_INTERVAL_MS: u64 = 200;
const POLL_ATTEMPTS: u32 = 50;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
    fn grecaptcha_render(
        container: &web_sys::Element,
        params: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// Checkbox widget. Emits the issued token through `on_token`, and an empty
/// string when the token expires.
#[component]
pub fn Recaptcha(#[prop(into)] on_token: Callback<String>) -> impl IntoView {
    let mount_point = NodeRef::<Div>::new();
    let rendered = StoredValue::new(false);

    Effect::new(move || {
        if rendered.get_value() {
            return;
        }
        if let Some(node) = mount_point.get() {
            rendered.set_value(true);
            render_when_ready(node.into(), on_token, POLL_ATTEMPTS);
        }
    });

    view! { <div class="captcha-slot" node_ref=mount_point></div> }
}

/// Retry until the script has installed `grecaptcha.render`, then mount the
/// widget. Gives up quietly after the attempt cap; the submit button then
/// simply never enables.
fn render_when_ready(container: web_sys::Element, on_token: Callback<String>, attempts_left: u32) {
    if api_ready() {
        mount_widget(&container, on_token);
        return;
    }
    if attempts_left == 0 {
        web_sys::console::warn_1(&JsValue::from_str(
            "[captcha] widget script never became ready",
        ));
        return;
    }
    set_timeout(
        move || render_when_ready(container, on_token, attempts_left - 1),
        Duration::from_millis(POLL_INTERVAL_MS),
    );
}

/// True once the script has installed a callable `grecaptcha.render`.
fn api_ready() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let api = match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("grecaptcha")) {
        Ok(api) if !api.is_undefined() => api,
        _ => return false,
    };
    js_sys::Reflect::get(&api, &JsValue::from_str("render"))
        .map(|render| render.is_function())
        .unwrap_or(false)
}

fn mount_widget(container: &web_sys::Element, on_token: Callback<String>) {
    let params = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        let _ = js_sys::Reflect::set(&params, &JsValue::from_str(key), value);
    };
    set("sitekey", &JsValue::from_str(SITE_KEY));
    set("theme", &JsValue::from_str("dark"));

    let issued = Closure::<dyn Fn(JsValue)>::new(move |token: JsValue| {
        on_token.run(token.as_string().unwrap_or_default());
    });
    set("callback", issued.as_ref());

    let expired = Closure::<dyn Fn()>::new(move || {
        on_token.run(String::new());
    });
    set("expired-callback", expired.as_ref());

    if let Err(err) = grecaptcha_render(container, &params) {
        web_sys::console::error_1(&err);
    }

    // The browser owns these callbacks for the life of the page.
    issued.forget();
    expired.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn api_is_not_ready_without_the_widget_script() {
        assert!(!api_ready());
    }
}
