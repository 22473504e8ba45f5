//! Runs catalog operations against the resolved set of devices.

use crate::catalog::{HostCommand, TemplateCatalog};
use crate::config::Config;
use crate::core::types::{
    DeviceId, ExecResult, RedirectResult, TargetResult, TargetSelection, TimedResult, Timeout,
};
use crate::device::{DeviceEnumerator, DeviceSelector, TargetResolver};
use crate::error::{AdbxError, Result};
use crate::process::Executor;
use log::{debug, info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Serial reported by `get-serialno` when no device is reachable
const UNKNOWN_SERIAL: &str = "unknown";

/// Entry point for every bridge invocation.
///
/// Holds read-only configuration and the template catalog; a single
/// dispatcher can serve any number of calls.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
    catalog: Arc<TemplateCatalog>,
    executor: Arc<dyn Executor>,
    resolver: TargetResolver,
}

impl Dispatcher {
    pub fn new(
        config: Arc<Config>,
        executor: Arc<dyn Executor>,
        selector: Arc<dyn DeviceSelector>,
    ) -> Result<Self> {
        let catalog = Arc::new(TemplateCatalog::with_overrides(&config.templates)?);
        let enumerator = DeviceEnumerator::new(config.bridge.program.clone(), Arc::clone(&executor));
        let resolver = TargetResolver::new(enumerator, selector);

        Ok(Self {
            config,
            catalog,
            executor,
            resolver,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Online devices, in bridge order
    pub async fn list_devices(&self) -> Result<Vec<DeviceId>> {
        self.resolver.enumerator().list_devices().await
    }

    /// Render `operation`, resolve targets and run it once per target.
    ///
    /// Results follow the resolved target order. A non-zero status on one
    /// target does not stop the others. No devices online yields an empty
    /// list rather than an error.
    pub async fn dispatch<S: AsRef<str>>(
        &self,
        operation: &str,
        params: &[S],
        selection: &TargetSelection,
    ) -> Result<Vec<TargetResult>> {
        let command = self.catalog.render(operation, params)?;
        debug!("Rendered {} as '{}'", operation, command);

        let targets = self.resolver.resolve(selection).await?;
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        self.run_on_targets(&targets, command.args()).await
    }

    /// `<program> -s <device> <args...>`
    pub fn qualified(&self, device: &DeviceId, args: &[String]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 3);
        argv.push(self.config.bridge.program.clone());
        argv.push("-s".to_string());
        argv.push(device.to_string());
        argv.extend(args.iter().cloned());
        argv
    }

    fn unqualified(&self, args: Vec<String>) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.config.bridge.program.clone());
        argv.extend(args);
        argv
    }

    async fn run_on_targets(&self, targets: &[DeviceId], args: &[String]) -> Result<Vec<TargetResult>> {
        if self.config.bridge.parallel && targets.len() > 1 {
            return self.run_parallel(targets, args).await;
        }

        let mut results = Vec::with_capacity(targets.len());
        for device in targets {
            let result = self.executor.run(&self.qualified(device, args)).await?;
            log_result(device, &result);
            results.push(TargetResult::new(device.clone(), result));
        }
        Ok(results)
    }

    /// One task per target; slots are filled by index so completion order
    /// never leaks into the result order.
    async fn run_parallel(&self, targets: &[DeviceId], args: &[String]) -> Result<Vec<TargetResult>> {
        debug!("Running on {} targets in parallel", targets.len());

        let mut tasks = JoinSet::new();
        for (index, device) in targets.iter().enumerate() {
            let executor = Arc::clone(&self.executor);
            let argv = self.qualified(device, args);
            tasks.spawn(async move { (index, executor.run(&argv).await) });
        }

        let mut slots: Vec<Option<ExecResult>> = vec![None; targets.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) =
                joined.map_err(|e| AdbxError::Other(format!("Dispatch task failed: {}", e)))?;
            slots[index] = Some(result?);
        }

        targets
            .iter()
            .zip(slots)
            .map(|(device, slot)| {
                let result = slot.ok_or_else(|| {
                    AdbxError::Other(format!("No result collected for {}", device))
                })?;
                log_result(device, &result);
                Ok(TargetResult::new(device.clone(), result))
            })
            .collect()
    }

    /// Run a device-independent command without resolving targets
    pub async fn run_host(&self, command: HostCommand) -> Result<ExecResult> {
        let argv = self.unqualified(command.args());
        self.executor.run(&argv).await
    }

    pub async fn version(&self) -> Result<ExecResult> {
        self.run_host(HostCommand::Version).await
    }

    pub async fn start_server(&self) -> Result<ExecResult> {
        self.run_host(HostCommand::StartServer).await
    }

    pub async fn kill_server(&self) -> Result<ExecResult> {
        self.run_host(HostCommand::KillServer).await
    }

    /// Raw `devices` listing, e.g. with `-l`
    pub async fn devices_raw(&self, opts: Vec<String>) -> Result<ExecResult> {
        self.run_host(HostCommand::Devices(opts)).await
    }

    /// Block until a device is online or `timeout` expires
    pub async fn wait_for_device(&self, timeout: Timeout) -> Result<TimedResult> {
        let argv = self.unqualified(HostCommand::WaitForDevice.args());
        self.executor.run_with_timeout(&argv, timeout).await
    }

    /// Targets a selection stands for, prompting if needed
    pub async fn resolve(&self, selection: &TargetSelection) -> Result<Vec<DeviceId>> {
        self.resolver.resolve(selection).await
    }

    /// Save a bug report per resolved target.
    ///
    /// With more than one target the device id is added to the file name.
    pub async fn bugreport(&self, dest: &Path, selection: &TargetSelection) -> Result<Vec<TargetResult>> {
        let targets = self.resolver.resolve(selection).await?;
        self.bugreport_on(dest, &targets).await
    }

    /// Bug reports for already resolved targets
    pub async fn bugreport_on(&self, dest: &Path, targets: &[DeviceId]) -> Result<Vec<TargetResult>> {
        let no_params: [&str; 0] = [];
        let command = self.catalog.render("bugreport", &no_params)?;
        let per_device = targets.len() > 1;

        let mut results = Vec::with_capacity(targets.len());
        for device in targets {
            let path = if per_device {
                device_report_path(dest, device)
            } else {
                dest.to_path_buf()
            };
            let result = self.bugreport_one(device, &path, command.args()).await?;
            log_result(device, &result);
            results.push(TargetResult::new(device.clone(), result));
        }
        Ok(results)
    }

    async fn bugreport_one(&self, device: &DeviceId, path: &Path, args: &[String]) -> Result<ExecResult> {
        // bugreport waits forever for a device that is not there
        if !self.is_available(device).await? {
            return Ok(ExecResult::new(0, "Device Not Found"));
        }

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to create {}: {}", path.display(), e);
                return Ok(ExecResult::new(
                    1,
                    format!("Failed to create {}: {}", path.display(), e),
                ));
            }
        };

        match self.executor.run_to_file(&self.qualified(device, args), file).await? {
            RedirectResult::Written { status } => Ok(ExecResult::new(
                status,
                format!("Success: Bug report saved to: {}", path.display()),
            )),
            RedirectResult::Failed { status, stderr, file } => {
                drop(file);
                Ok(ExecResult::new(status, stderr))
            }
        }
    }

    async fn is_available(&self, device: &DeviceId) -> Result<bool> {
        let no_params: [&str; 0] = [];
        let command = self.catalog.render("get-serialno", &no_params)?;
        let result = self.executor.run(&self.qualified(device, command.args())).await?;
        Ok(result.success() && result.output.trim() != UNKNOWN_SERIAL)
    }
}

fn log_result(device: &DeviceId, result: &ExecResult) {
    if result.success() {
        info!("{}: ok", device);
    } else {
        warn!("{}: exited with status {}", device, result.status);
    }
}

/// `report.txt` for device `emulator-5554` becomes `report-emulator-5554.txt`
fn device_report_path(dest: &Path, device: &DeviceId) -> PathBuf {
    let id: String = device
        .as_str()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bugreport".to_string());
    let name = match dest.extension() {
        Some(ext) => format!("{}-{}.{}", stem, id, ext.to_string_lossy()),
        None => format!("{}-{}", stem, id),
    };
    dest.with_file_name(name)
}
