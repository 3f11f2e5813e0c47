//! JS entry points for the page.
//!
//! `capturarSaldo` keeps the name the page markup already calls from its
//! button handler, so `onclick="capturarSaldo()"` works unchanged.

use wasm_bindgen::prelude::*;

use crate::config::FailurePolicy;
use crate::trigger::RemoteActionTrigger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
}

/// Fire one capture request. Returns before the request completes.
#[wasm_bindgen(js_name = capturarSaldo)]
pub fn capturar_saldo() {
    RemoteActionTrigger::browser(FailurePolicy::Silent).fire();
}

/// Same as `capturarSaldo`, but failures are also shown to the user.
#[wasm_bindgen(js_name = capturarSaldoConAviso)]
pub fn capturar_saldo_con_aviso() {
    RemoteActionTrigger::browser(FailurePolicy::Surface).fire();
}
