//! Application lifecycle: install and uninstall on every target.

mod install;
mod uninstall;

pub use install::InstallArgs;
pub use uninstall::UninstallArgs;

/// Join the set flags into the option-list parameter of a `{..}` slot
fn option_list(flags: &[(bool, &str)]) -> String {
    flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, flag)| *flag)
        .collect::<Vec<_>>()
        .join(" ")
}
