//! Per-ONU polling against one vendor.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::Session;
use crate::error::{Result, VendorError};
use crate::record::{
    MacAddressEntry, OnuConfigRecord, OnuInfoRecord, OnuStatusRecord, PortStateRecord,
    SignalLevelRecord,
};
use crate::status::OnuState;
use crate::vendor::{Capability, CommandText, OltVendor, Query, VendorRegistry, merge_detail};

/// Everything polled for one ONU in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuSnapshot {
    pub status: OnuStatusRecord,

    /// Only polled while the ONU is online.
    pub signal: Option<SignalLevelRecord>,

    /// Only polled while the ONU is online.
    pub info: Option<OnuInfoRecord>,
}

/// Runs vendor queries over a [`Session`].
///
/// # Example
///
/// ```rust,no_run
/// use oltscope::session::{OnuPoller, Session};
/// use oltscope::vendor::VendorRegistry;
///
/// # async fn example(session: &mut impl Session) -> Result<(), oltscope::Error> {
/// let registry = VendorRegistry::builtin();
/// let poller = OnuPoller::new(&registry, "bdcom")?;
///
/// let status = poller.poll_status(session, "0/8", "15").await?;
/// println!("{} is {}", status.onu_id.as_deref().unwrap_or("?"), status.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct OnuPoller<'r> {
    vendor: &'r dyn OltVendor,
}

impl<'r> OnuPoller<'r> {
    /// Resolve `vendor_key` (case-insensitive, `auto` allowed) in `registry`.
    pub fn new(registry: &'r VendorRegistry, vendor_key: &str) -> Result<Self> {
        Ok(Self {
            vendor: registry.resolve(vendor_key)?,
        })
    }

    /// Poll a vendor directly, bypassing the registry.
    pub fn for_vendor(vendor: &'r dyn OltVendor) -> Self {
        Self { vendor }
    }

    /// The vendor this poller drives.
    pub fn vendor(&self) -> &'r dyn OltVendor {
        self.vendor
    }

    /// Primary status, enriched with active or inactive detail when the
    /// vendor supports it.
    ///
    /// The detail query depends on the classified primary status, so it is
    /// only sent after the primary output is parsed. A failed detail query
    /// is logged and the primary record returned as is.
    pub async fn poll_status<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<OnuStatusRecord> {
        let command = self.vendor.build_status_command(port, onu_id);
        let raw = run(session, &command).await?;
        let mut record = self.vendor.parse_status(&raw);
        record.port.get_or_insert_with(|| port.trim().to_string());
        record.onu_id.get_or_insert_with(|| onu_id.trim().to_string());

        let detail = match record.status {
            OnuState::Online => self.vendor.active_detail(),
            OnuState::Offline => self.vendor.inactive_detail(),
            OnuState::Unknown => None,
        };
        let Some(query) = detail else {
            return Ok(record);
        };

        let command = query.build_command(port, onu_id);
        match run(session, &command).await {
            Ok(raw) => {
                let detail = query.parse(&raw);
                if detail.is_empty() {
                    debug!("{} detail for {}:{} was empty", self.vendor.name(), port, onu_id);
                }
                record = merge_detail(record, &detail);
            }
            Err(e) => warn!(
                "{} detail query for {}:{} failed: {}",
                self.vendor.name(),
                port,
                onu_id,
                e
            ),
        }
        Ok(record)
    }

    /// Optical diagnostics.
    pub async fn poll_signal<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<SignalLevelRecord> {
        let command = self.vendor.build_signal_command(port, onu_id);
        let raw = run(session, &command).await?;
        Ok(self.vendor.parse_signal(&raw))
    }

    /// Hardware and firmware identity.
    pub async fn poll_info<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<OnuInfoRecord> {
        let command = self.vendor.build_info_command(port, onu_id);
        let raw = run(session, &command).await?;
        Ok(self.vendor.parse_info(&raw))
    }

    /// VLAN and SLA configuration.
    pub async fn poll_config<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<OnuConfigRecord> {
        let query = self.require(self.vendor.config_query(), Capability::Config)?;
        run_query(session, query, port, onu_id).await
    }

    /// MAC addresses learned behind the ONU.
    pub async fn poll_mac_table<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<Vec<MacAddressEntry>> {
        let query = self.require(self.vendor.mac_table_query(), Capability::MacTable)?;
        run_query(session, query, port, onu_id).await
    }

    /// Link state of the ONU user port.
    pub async fn poll_port_state<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<PortStateRecord> {
        let query = self.require(self.vendor.port_state_query(), Capability::PortState)?;
        run_query(session, query, port, onu_id).await
    }

    /// Status, then signal and info while the ONU is online.
    pub async fn poll_snapshot<S: Session>(
        &self,
        session: &mut S,
        port: &str,
        onu_id: &str,
    ) -> Result<OnuSnapshot> {
        let status = self.poll_status(session, port, onu_id).await?;
        if !status.status.is_online() {
            return Ok(OnuSnapshot {
                status,
                signal: None,
                info: None,
            });
        }

        let signal = self.poll_signal(session, port, onu_id).await?;
        let info = self.poll_info(session, port, onu_id).await?;
        Ok(OnuSnapshot {
            status,
            signal: Some(signal),
            info: Some(info),
        })
    }

    fn require<Q: ?Sized>(&self, query: Option<&'r Q>, capability: Capability) -> Result<&'r Q> {
        query.ok_or_else(|| {
            VendorError::CapabilityUnavailable {
                vendor: self.vendor.name().to_string(),
                capability: capability.as_str(),
            }
            .into()
        })
    }
}

impl std::fmt::Debug for OnuPoller<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnuPoller")
            .field("vendor", &self.vendor.name())
            .finish()
    }
}

/// Send every command line and return the query line's output.
async fn run<S: Session>(session: &mut S, command: &CommandText) -> Result<String> {
    debug!("sending {:?}", command.lines());
    let outputs = session.execute(command.lines()).await?;
    if outputs.len() < command.lines().len() {
        debug!(
            "session returned {} outputs for {} lines",
            outputs.len(),
            command.lines().len()
        );
    }
    Ok(command.select_output(&outputs).to_string())
}

async fn run_query<S: Session, R>(
    session: &mut S,
    query: &dyn Query<R>,
    port: &str,
    onu_id: &str,
) -> Result<R> {
    let command = query.build_command(port, onu_id);
    let raw = run(session, &command).await?;
    Ok(query.parse(&raw))
}
