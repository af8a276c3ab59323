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

//! Layout configuration.
//!
//! The frontends receive their runtime settings as a JSON blob (see the
//! `__APP_CONFIG` handling in the UI crates); the layout settings use the same
//! camelCase shape so they can be embedded in that blob:
//!
//! ```json
//! { "platform": "mobile", "maxParticipants": 4, "retainLastSpeaker": false }
//! ```

use crate::constants::{
    DESKTOP_MAX_PARTICIPANTS, MAX_PARTICIPANTS_CEILING, MOBILE_MAX_PARTICIPANTS,
};
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use videocall_layout_types::Platform;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default)]
    pub platform: Platform,
    /// Overrides the platform's strip size when set.
    #[serde(default)]
    pub max_participants: Option<usize>,
    /// Keep showing the last dominant speaker when the transport reports
    /// that nobody is speaking.
    #[serde(default = "default_retain_last_speaker")]
    pub retain_last_speaker: bool,
}

fn default_retain_last_speaker() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl LayoutConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            max_participants: None,
            retain_last_speaker: default_retain_last_speaker(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Maximum number of tiles in the participant strip.
    pub fn max_count(&self) -> usize {
        self.max_participants
            .unwrap_or_else(|| platform_max_participants(self.platform))
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.max_participants {
            Some(max) if max > MAX_PARTICIPANTS_CEILING => Err(LayoutError::Config(format!(
                "maxParticipants {max} exceeds the ceiling of {MAX_PARTICIPANTS_CEILING}"
            ))),
            _ => Ok(()),
        }
    }
}

pub fn platform_max_participants(platform: Platform) -> usize {
    match platform {
        Platform::Mobile => MOBILE_MAX_PARTICIPANTS,
        Platform::Desktop => DESKTOP_MAX_PARTICIPANTS,
    }
}
