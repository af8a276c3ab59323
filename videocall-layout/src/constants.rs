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

// Strip sizes mirror the canvas limits used by the Yew and Dioxus frontends.
pub const DESKTOP_MAX_PARTICIPANTS: usize = 20;
pub const MOBILE_MAX_PARTICIPANTS: usize = 6;

// Anything above this would not fit on screen anyway.
pub const MAX_PARTICIPANTS_CEILING: usize = 100;

pub const LAYOUT_EVENT_BUS_CAPACITY: usize = 256;
#[cfg(feature = "diagnostics")]
pub const DIAGNOSTICS_CAPACITY: usize = 1024;
