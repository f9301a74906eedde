#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod controller;
mod core;
mod dom;
mod effect;
mod events;
mod schedule;

use effect::HeroEffect;

thread_local! {
    // One effect per page.
    static ACTIVE: RefCell<Option<HeroEffect>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chrome-hero starting");

    if let Err(e) = mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mounts the effect unless one is already running. Returns whether an effect
/// is live afterwards; `false` means the page has no hero or mounting failed.
#[wasm_bindgen]
pub fn mount_hero_effect() -> bool {
    match mount() {
        Ok(live) => live,
        Err(e) => {
            log::error!("mount error: {:?}", e);
            false
        }
    }
}

/// Stops every loop, clears the idle timer and unregisters all listeners.
#[wasm_bindgen]
pub fn unmount_hero_effect() {
    let effect = ACTIVE.with(|slot| slot.borrow_mut().take());
    drop(effect);
}

fn mount() -> anyhow::Result<bool> {
    if ACTIVE.with(|slot| slot.borrow().is_some()) {
        return Ok(true);
    }
    let Some(effect) = HeroEffect::mount()? else {
        return Ok(false);
    };
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(effect));
    Ok(true)
}
