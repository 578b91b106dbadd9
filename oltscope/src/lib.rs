//! # oltscope
//!
//! Multi-vendor OLT command builder and CLI output parser for PON networks.
//!
//! oltscope turns "which ONU on which port of which OLT" into the exact CLI
//! text to send, and turns the semi-structured text the OLT prints back into
//! typed records. It never opens connections itself: a caller-supplied
//! [`Session`](session::Session) runs the commands.
//!
//! ## Features
//!
//! - Vendor plugins for BDCOM EPON, Huawei GPON and ZTE GPON
//! - Optional capabilities (active/inactive detail, VLAN/SLA config, MAC
//!   table, UNI port state) discovered at runtime
//! - Tolerant parsing: wrapped rows, wide rows, `N/A` placeholders and empty
//!   output never panic or fail
//! - Canonical MAC addresses and a three-way online/offline/unknown status
//!
//! ## Quick Start
//!
//! ```rust
//! use oltscope::{OnuState, VendorRegistry};
//!
//! let registry = VendorRegistry::builtin();
//! let vendor = registry.resolve("BDCOM")?;
//!
//! let command = vendor.build_status_command("0/8", "15");
//! assert_eq!(command.query(), "show epon onu-information interface EPON0/8:15");
//!
//! let raw = "\
//! Interface EPON0/8 has registered 1 ONUs:
//! IntfName   VendorID  ModelID    MAC Address    Description
//! ---------- --------- ---------- -------------- -----------
//! EPON0/8:15 PICO      E910       70a5.6add.7e1d N/A
//!     static   deregistered     power-off
//! ";
//! let record = vendor.parse_status(raw);
//! assert_eq!(record.status, OnuState::Offline);
//! assert_eq!(record.mac_address.as_deref(), Some("70:a5:6a:dd:7e:1d"));
//! # Ok::<(), oltscope::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod record;
pub mod session;
pub mod status;
pub mod table;
pub mod vendor;

// Re-export main types for convenience
pub use config::ParserConfig;
pub use error::{Error, Result};
pub use record::{
    MacAddressEntry, OnuConfigRecord, OnuInfoRecord, OnuStatusDetail, OnuStatusRecord,
    PortStateRecord, RawData, SignalLevelRecord, SlaProfile,
};
pub use session::{OnuPoller, OnuSnapshot, Session};
pub use status::OnuState;
pub use vendor::{Capability, CommandText, OltVendor, Query, VendorRegistry};
