use crate::testing::mocks::MockExecutor;

/// `adb devices` with nothing attached
pub const NO_DEVICES: &str = "List of devices attached\n\n";

/// `adb devices` with a single phone
pub const ONE_DEVICE: &str = "List of devices attached\nABC123\tdevice\n\n";

/// `adb devices` with an emulator and a phone
pub const TWO_DEVICES: &str = "List of devices attached\nemulator-5554\tdevice\nABC123\tdevice\n\n";

/// `adb devices` right after the daemon started, with devices in every state
pub const MIXED_DEVICES: &str = "* daemon not running; starting now at tcp:5037\n\
* daemon started successfully\n\
List of devices attached\n\
emulator-5554\tdevice\n\
emulator-5556\toffline\n\
R58M123ABC\tunauthorized\n\
192.168.1.100:5555\tdevice\n\
\n";

/// Command line the enumerator runs with the default program
pub const DEVICES_CMD: &str = "adb devices";

/// Executor whose `adb devices` prints `listing`
pub fn executor_with_devices(listing: &str) -> MockExecutor {
    MockExecutor::new().with_response(DEVICES_CMD, 0, listing)
}
