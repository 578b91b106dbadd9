//! Typed records produced by vendor parsers.
//!
//! Every record is created fresh per parse call and owned by the caller.
//! Optional fields mean "not present in the output", never zero.

use serde::{Deserialize, Serialize};

use crate::normalize::snippet;
use crate::status::OnuState;

/// Diagnostic copy of the raw output a record was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawData {
    /// Bounded snippet of the raw text.
    pub snippet: String,

    /// Set when only a last-resort heuristic could be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_warning: Option<String>,
}

impl RawData {
    /// Capture at most `limit` characters of `raw`.
    pub fn capture(raw: &str, limit: usize) -> Self {
        Self {
            snippet: snippet(raw, limit),
            parse_warning: None,
        }
    }

    /// Attach a parse warning.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.parse_warning = Some(warning.into());
        self
    }
}

/// Primary ONU status record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuStatusRecord {
    pub port: Option<String>,
    pub onu_id: Option<String>,

    /// Canonical state; always set.
    pub status: OnuState,

    pub vendor_id: Option<String>,
    pub model_id: Option<String>,

    /// `vendor_id + " " + model_id`, present when both are.
    pub onu_type: Option<String>,

    /// Canonical colon-separated form when the device printed a parsable MAC.
    pub mac_address: Option<String>,
    pub description: Option<String>,

    /// `static` or `dynamic`.
    pub bind_type: Option<String>,

    /// Raw vendor status token, verbatim.
    pub onu_status: Option<String>,

    pub last_dereg_reason: Option<String>,

    /// Distance from the OLT in meters.
    pub distance: Option<u32>,
    pub oam_status: Option<String>,

    /// Elapsed online time for online ONUs, absent time for offline ones.
    pub alive_time: Option<String>,
    pub last_reg_time: Option<String>,
    pub last_dereg_time: Option<String>,

    /// Set only when parsing definitively failed.
    pub error: Option<String>,

    pub raw_data: Option<RawData>,
}

impl OnuStatusRecord {
    /// Record for output that names no ONU at all.
    pub fn not_found(raw: &str, limit: usize) -> Self {
        Self {
            status: OnuState::Unknown,
            error: Some("ONU not found or not registered".to_string()),
            raw_data: Some(RawData::capture(raw, limit)),
            ..Default::default()
        }
    }

    /// Empty, error-free record for a legitimate "no data" answer.
    pub fn empty(raw: &str, limit: usize) -> Self {
        Self {
            raw_data: Some(RawData::capture(raw, limit)),
            ..Default::default()
        }
    }

    /// Set the raw status token and its classification together.
    pub fn set_status_token(&mut self, token: &str) {
        self.status = crate::status::classify_logged(token);
        self.onu_status = Some(token.to_string());
    }

    /// Recompute `onu_type` from vendor and model ids.
    pub fn derive_onu_type(&mut self) {
        self.onu_type = match (&self.vendor_id, &self.model_id) {
            (Some(vendor), Some(model)) => Some(format!("{vendor} {model}")),
            _ => None,
        };
    }

    /// Whether parsing failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Partial status produced by active/inactive detail queries.
///
/// Merged onto an [`OnuStatusRecord`] with
/// [`merge_detail`](crate::vendor::merge_detail).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuStatusDetail {
    pub status: Option<OnuState>,
    pub onu_status: Option<String>,
    pub vendor_id: Option<String>,
    pub model_id: Option<String>,
    pub mac_address: Option<String>,
    pub description: Option<String>,
    pub bind_type: Option<String>,
    pub oam_status: Option<String>,
    pub distance: Option<u32>,
    pub last_reg_time: Option<String>,
    pub last_dereg_time: Option<String>,
    pub last_dereg_reason: Option<String>,
    pub alive_time: Option<String>,
    pub raw_data: Option<RawData>,
}

impl OnuStatusDetail {
    /// True when the detail output carried no usable field.
    pub fn is_empty(&self) -> bool {
        let stripped = Self {
            raw_data: None,
            ..self.clone()
        };
        stripped == Self::default()
    }
}

/// Optical diagnostics (DDM) of an ONU transceiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalLevelRecord {
    /// Received optical power, dBm.
    pub rx_power: Option<f64>,
    /// Transmitted optical power, dBm.
    pub tx_power: Option<f64>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Volts.
    pub voltage: Option<f64>,
    /// Milliamperes.
    pub bias_current: Option<f64>,
    pub raw_data: Option<RawData>,
}

impl SignalLevelRecord {
    /// True when no optical field was found.
    pub fn is_empty(&self) -> bool {
        self.rx_power.is_none()
            && self.tx_power.is_none()
            && self.temperature.is_none()
            && self.voltage.is_none()
            && self.bias_current.is_none()
    }
}

/// Hardware and firmware identity of an ONU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuInfoRecord {
    pub vendor_id: Option<String>,
    pub model_id: Option<String>,
    pub mac_address: Option<String>,
    pub serial_number: Option<String>,
    pub hardware_version: Option<String>,
    pub software_version: Option<String>,
    pub firmware_version: Option<String>,
    pub chipset_vendor_id: Option<String>,
    pub chipset_model: Option<String>,
    pub description: Option<String>,
    pub raw_data: Option<RawData>,
}

/// Peak and committed rate pair, kbps as transmitted by the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaProfile {
    pub pir: Option<u64>,
    pub cir: Option<u64>,
}

/// VLAN and rate-limit configuration of an ONU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuConfigRecord {
    pub vlan_mode: Option<String>,
    pub vlan_id: Option<u16>,
    pub priority: Option<u8>,
    pub upstream_sla: Option<SlaProfile>,
    pub downstream_sla: Option<SlaProfile>,
    pub raw_data: Option<RawData>,
}

/// One row of an ONU MAC address table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacAddressEntry {
    pub mac_address: String,
    pub vlan: u16,
    /// Raw vendor type, e.g. `DYNAMIC`.
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// Hardware state reported when the output is empty.
pub const PORT_STATE_UNKNOWN: &str = "unknown";

/// Link state of an ONU user port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortStateRecord {
    /// `Link-Up`, `Link-Down`, or `unknown` when nothing was returned.
    pub hardware_state: String,
    pub speed: Option<String>,
    pub duplex: Option<String>,
    pub raw_data: Option<RawData>,
}

impl PortStateRecord {
    pub fn is_link_up(&self) -> bool {
        self.hardware_state.eq_ignore_ascii_case("link-up")
    }
}

impl Default for PortStateRecord {
    fn default() -> Self {
        Self {
            hardware_state: PORT_STATE_UNKNOWN.to_string(),
            speed: None,
            duplex: None,
            raw_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_record() {
        let record = OnuStatusRecord::not_found("", 500);
        assert_eq!(record.status, OnuState::Unknown);
        assert_eq!(
            record.error.as_deref(),
            Some("ONU not found or not registered")
        );
    }

    #[test]
    fn test_derive_onu_type() {
        let mut record = OnuStatusRecord {
            vendor_id: Some("PICO".to_string()),
            model_id: Some("E910".to_string()),
            ..Default::default()
        };
        record.derive_onu_type();
        assert_eq!(record.onu_type.as_deref(), Some("PICO E910"));

        record.model_id = None;
        record.derive_onu_type();
        assert_eq!(record.onu_type, None);
    }

    #[test]
    fn test_detail_is_empty_ignores_raw_data() {
        let detail = OnuStatusDetail {
            raw_data: Some(RawData::capture("x", 500)),
            ..Default::default()
        };
        assert!(detail.is_empty());

        let detail = OnuStatusDetail {
            distance: Some(1180),
            ..Default::default()
        };
        assert!(!detail.is_empty());
    }

    #[test]
    fn test_status_record_json_shape() {
        let record = OnuStatusRecord {
            port: Some("0/8".to_string()),
            onu_id: Some("15".to_string()),
            status: OnuState::Offline,
            last_dereg_reason: Some("power-off".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["port"], "0/8");
        assert_eq!(json["onuId"], "15");
        assert_eq!(json["status"], "offline");
        assert_eq!(json["lastDeregReason"], "power-off");
    }

    #[test]
    fn test_port_state_default_unknown() {
        let state = PortStateRecord::default();
        assert_eq!(state.hardware_state, "unknown");
        assert!(!state.is_link_up());
    }

    #[test]
    fn test_mac_entry_type_field_name() {
        let entry = MacAddressEntry {
            mac_address: "70:a5:6a:dd:7e:1d".to_string(),
            vlan: 100,
            entry_type: "DYNAMIC".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "DYNAMIC");
        assert_eq!(json["macAddress"], "70:a5:6a:dd:7e:1d");
    }
}
