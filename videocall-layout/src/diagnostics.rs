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

//! Layout diagnostics.
//!
//! Every re-evaluation reports a small metrics event, shaped like the
//! videocall diagnostics events so the same dashboards can consume it. The
//! channel is bounded; when it is full the oldest event is discarded so a
//! late subscriber still sees the current layout.

use crate::constants::DIAGNOSTICS_CAPACITY;
use crate::frame::Layout;
use flume::{Receiver, Sender, TrySendError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

pub const SUBSYSTEM: &str = "layout";

#[derive(Clone, Debug, Serialize)]
pub struct DiagEvent {
    pub subsystem: &'static str,
    /// The local participant whose view was evaluated.
    pub stream_id: Option<String>,
    /// Unix time in milliseconds when the layout was computed.
    pub ts_ms: u64,
    pub metrics: Vec<Metric>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: MetricValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum MetricValue {
    U64(u64),
    Text(String),
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::U64(v)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::U64(v as u64)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        MetricValue::Text(v)
    }
}

/// Shorthand for constructing a [`Metric`].
#[macro_export]
macro_rules! metric {
    ($name:expr, $value:expr) => {
        $crate::diagnostics::Metric {
            name: $name,
            value: $crate::diagnostics::MetricValue::from($value),
        }
    };
}

static BUS: Lazy<(Sender<DiagEvent>, Receiver<DiagEvent>)> =
    Lazy::new(|| flume::bounded(DIAGNOSTICS_CAPACITY));

pub fn global_sender() -> &'static Sender<DiagEvent> {
    &BUS.0
}

/// Receivers share one queue: each event goes to exactly one of them.
pub fn subscribe() -> Receiver<DiagEvent> {
    BUS.1.clone()
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Queues an event, evicting the oldest queued one if the channel is full.
pub fn publish(event: DiagEvent) {
    match BUS.0.try_send(event) {
        Ok(()) | Err(TrySendError::Disconnected(_)) => {}
        Err(TrySendError::Full(event)) => {
            let _ = BUS.1.try_recv();
            let _ = BUS.0.try_send(event);
        }
    }
}

pub(crate) fn report_layout(local: &str, layout: &Layout, history_len: usize) {
    let priority = layout
        .main
        .video_priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "none".to_string());
    publish(DiagEvent {
        subsystem: SUBSYSTEM,
        stream_id: Some(local.to_string()),
        ts_ms: now_ms(),
        metrics: vec![
            metric!("main_participant", layout.main.participant.to_string()),
            metric!("main_priority", priority),
            metric!("displayable_count", layout.partition.displayable.len()),
            metric!("overflow_count", layout.partition.overflow_count()),
            metric!("history_len", history_len),
        ],
    });
}
