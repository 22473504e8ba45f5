pub mod enumerator;
pub mod resolver;
pub mod selector;

pub use enumerator::{parse_device_list, DeviceEnumerator};
pub use resolver::{select_explicit, TargetResolver};
pub use selector::{parse_selection, write_menu, ConsoleSelector, DeviceSelector, SelectAll};
