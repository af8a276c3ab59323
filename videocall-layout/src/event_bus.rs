/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Global event bus for layout updates.
//!
//! A MPMC broadcast channel: every subscriber receives every update emitted
//! after it subscribed. When a subscriber falls behind, the oldest updates are
//! dropped; only the latest layout matters to a renderer.
//!
//! # Example
//!
//! ```ignore
//! use videocall_layout::subscribe_layout_updates;
//!
//! let mut rx = subscribe_layout_updates();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(update) = rx.recv().await {
//!         render_main(&update.main);
//!         render_strip(&update.displayable, update.overflow_count);
//!     }
//! });
//! ```

use crate::constants::LAYOUT_EVENT_BUS_CAPACITY;
use crate::events::LayoutUpdate;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use once_cell::sync::Lazy;

// The inactive receiver keeps the channel open while nobody is subscribed.
static BUS: Lazy<(Sender<LayoutUpdate>, InactiveReceiver<LayoutUpdate>)> = Lazy::new(|| {
    let (mut sender, receiver) = broadcast(LAYOUT_EVENT_BUS_CAPACITY);
    sender.set_overflow(true);
    (sender, receiver.deactivate())
});

/// Get the global sender for layout updates.
pub fn global_layout_sender() -> Sender<LayoutUpdate> {
    BUS.0.clone()
}

/// Subscribe to layout updates.
pub fn subscribe_layout_updates() -> Receiver<LayoutUpdate> {
    BUS.0.new_receiver()
}

/// Emit a layout update to all subscribers. Never blocks; with no active
/// subscribers the update is discarded.
pub fn emit_layout_update(update: LayoutUpdate) {
    let _ = BUS.0.try_broadcast(update);
}
