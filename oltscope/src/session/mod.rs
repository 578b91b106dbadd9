//! Command execution seam and ONU polling flows.
//!
//! oltscope never opens connections itself. Callers implement [`Session`]
//! over whatever transport reaches the OLT (an SSH driver, a telnet client,
//! a capture replay) and hand it to an [`OnuPoller`], which builds the
//! vendor's commands, picks the relevant output and runs the parsers.

mod fleet;
mod poller;
#[cfg(test)]
pub(crate) mod scripted;

pub use fleet::{DeviceJob, DeviceReport, OnuTarget, poll_devices};
pub use poller::{OnuPoller, OnuSnapshot};

use std::future::Future;

use crate::error::Result;

/// A live CLI session on one OLT.
pub trait Session: Send {
    /// Send every line in order and return one output per line.
    ///
    /// Outputs should have the echoed command and trailing prompt removed.
    /// Returning fewer outputs than lines is allowed; missing outputs are
    /// parsed as empty text.
    fn execute(&mut self, commands: &[String]) -> impl Future<Output = Result<Vec<String>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorRegistry;

    /// Answers only the first line of each batch.
    struct FirstLineOnly;

    impl Session for FirstLineOnly {
        async fn execute(&mut self, commands: &[String]) -> Result<Vec<String>> {
            Ok(commands
                .iter()
                .take(1)
                .map(|_| "  Rx optical power(dBm) : -20.00".to_string())
                .collect())
        }
    }

    #[test]
    fn test_missing_query_output_reads_empty() {
        let registry = VendorRegistry::builtin();
        let poller = OnuPoller::new(&registry, "huawei").unwrap();

        let record =
            tokio_test::block_on(poller.poll_signal(&mut FirstLineOnly, "0/1/0", "5")).unwrap();
        assert!(record.is_empty());
        assert_eq!(record.raw_data.unwrap().snippet, "");
    }
}
