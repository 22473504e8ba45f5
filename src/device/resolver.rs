use crate::core::types::{DeviceId, TargetSelection};
use crate::device::enumerator::DeviceEnumerator;
use crate::device::selector::{parse_selection, DeviceSelector};
use crate::error::{AdbxError, Result};
use log::{debug, warn};
use std::sync::Arc;

/// Decides which devices an operation runs against
#[derive(Clone)]
pub struct TargetResolver {
    enumerator: DeviceEnumerator,
    selector: Arc<dyn DeviceSelector>,
}

impl TargetResolver {
    pub fn new(enumerator: DeviceEnumerator, selector: Arc<dyn DeviceSelector>) -> Self {
        Self {
            enumerator,
            selector,
        }
    }

    pub fn enumerator(&self) -> &DeviceEnumerator {
        &self.enumerator
    }

    /// Resolve a selection against a fresh enumeration.
    ///
    /// * explicit indexes: those devices, in the given order
    /// * nothing online: empty, with a warning
    /// * one device online: that device
    /// * several online: ask the selector
    pub async fn resolve(&self, selection: &TargetSelection) -> Result<Vec<DeviceId>> {
        let devices = self.enumerator.list_devices().await?;

        if let Some(indexes) = selection.indexes() {
            debug!("Resolving explicit indexes {:?}", indexes);
            return select_explicit(&devices, indexes);
        }

        match devices.len() {
            0 => {
                warn!("No devices attached, nothing to do");
                Ok(Vec::new())
            }
            1 => {
                debug!("Single device online: {}", devices[0]);
                Ok(devices)
            }
            n => {
                debug!("{} devices online, asking for a selection", n);
                self.selector.present_choices(&devices)?;
                let answer = self.selector.read_selection()?;
                parse_selection(&answer, &devices)
            }
        }
    }
}

/// Pick devices by index.
///
/// Only the number of indexes is checked against the number of devices up
/// front; each index is then looked up on its own.
pub fn select_explicit(devices: &[DeviceId], indexes: &[usize]) -> Result<Vec<DeviceId>> {
    if indexes.len() > devices.len() {
        return Err(AdbxError::IndexOutOfRange {
            requested: indexes.len(),
            available: devices.len(),
        });
    }

    indexes
        .iter()
        .map(|&index| {
            devices
                .get(index)
                .cloned()
                .ok_or(AdbxError::NoDeviceAtIndex {
                    index,
                    available: devices.len(),
                })
        })
        .collect()
}
