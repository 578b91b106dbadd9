//! Concurrent polling across many OLTs.

use futures_util::future::join_all;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{OnuPoller, OnuSnapshot, Session};
use crate::error::{Error, Result};
use crate::vendor::VendorRegistry;

/// One ONU to poll.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuTarget {
    pub port: String,
    pub onu_id: String,
}

impl OnuTarget {
    pub fn new(port: impl Into<String>, onu_id: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            onu_id: onu_id.into(),
        }
    }
}

/// One OLT: its session, vendor key and the ONUs to poll on it.
#[derive(Debug)]
pub struct DeviceJob<S> {
    pub device: String,
    pub vendor: String,
    pub session: S,
    pub targets: Vec<OnuTarget>,
}

/// Outcome of polling one OLT.
///
/// `result` is an error when the vendor could not be resolved or the session
/// failed; the remaining targets on that OLT are then skipped.
#[derive(Debug)]
pub struct DeviceReport<S> {
    pub device: String,
    pub session: S,
    pub result: Result<Vec<OnuSnapshot>>,
}

/// Poll every device concurrently. Targets on one device run in order over
/// its single session.
///
/// A failing device never affects the others; reports come back in job
/// order.
pub async fn poll_devices<S: Session>(
    registry: &VendorRegistry,
    jobs: Vec<DeviceJob<S>>,
) -> Vec<DeviceReport<S>> {
    info!("polling {} OLTs", jobs.len());
    join_all(jobs.into_iter().map(|job| poll_device(registry, job))).await
}

async fn poll_device<S: Session>(registry: &VendorRegistry, job: DeviceJob<S>) -> DeviceReport<S> {
    let DeviceJob {
        device,
        vendor,
        mut session,
        targets,
    } = job;

    let result = async {
        let poller = OnuPoller::new(registry, &vendor)?;
        let mut snapshots = Vec::with_capacity(targets.len());
        for target in &targets {
            snapshots.push(
                poller
                    .poll_snapshot(&mut session, &target.port, &target.onu_id)
                    .await?,
            );
        }
        Ok::<_, Error>(snapshots)
    }
    .await;

    if let Err(e) = &result {
        warn!("polling {} failed: {}", device, e);
    }
    DeviceReport {
        device,
        session,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::scripted::ScriptedSession;
    use crate::status::OnuState;

    const STATUS: &str = "\
---------- --------- ---------- -------------- -----------
EPON0/8:16 PICO      E910       70a5.6add.7e20 N/A
    static   deregistered     wire-down
";

    fn job(device: &str, vendor: &str, session: ScriptedSession) -> DeviceJob<ScriptedSession> {
        DeviceJob {
            device: device.to_string(),
            vendor: vendor.to_string(),
            session,
            targets: vec![OnuTarget::new("0/8", "16")],
        }
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let registry = VendorRegistry::builtin();
        let healthy = ScriptedSession::new()
            .with_output("show epon onu-information interface EPON0/8:16", STATUS);
        let broken = ScriptedSession::new()
            .failing_on("show epon onu-information interface EPON0/8:16");

        let reports = poll_devices(
            &registry,
            vec![
                job("olt-a", "bdcom", healthy),
                job("olt-b", "bdcom", broken),
                job("olt-c", "nokia", ScriptedSession::new()),
            ],
        )
        .await;

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].device, "olt-a");
        let snapshots = reports[0].result.as_ref().unwrap();
        assert_eq!(snapshots[0].status.status, OnuState::Offline);

        assert!(matches!(reports[1].result, Err(Error::Session(_))));
        assert!(matches!(reports[2].result, Err(Error::Vendor(_))));
        assert!(reports[2].session.sent.is_empty());
    }

    #[tokio::test]
    async fn test_targets_run_in_order() {
        let registry = VendorRegistry::builtin();
        let mut olt = job("olt-a", "auto", ScriptedSession::new());
        olt.targets.push(OnuTarget::new("0/8", "17"));

        let reports = poll_devices(&registry, vec![olt]).await;
        assert_eq!(
            reports[0].session.sent,
            [
                "show epon onu-information interface EPON0/8:16",
                "show epon onu-information interface EPON0/8:17",
            ]
        );
        assert_eq!(reports[0].result.as_ref().unwrap().len(), 2);
    }
}
