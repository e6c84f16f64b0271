use crate::error::LauncherError;

use super::ResolvedTarget;

/// Hands a resolved target to something that can display it
pub trait Opener {
    fn open(&self, target: &ResolvedTarget) -> Result<(), LauncherError>;
}

/// Opens targets with the platform's default handler (usually the browser).
///
/// Dispatch is fire-and-forget: the handler is spawned detached and never
/// waited on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, target: &ResolvedTarget) -> Result<(), LauncherError> {
        log::debug!("Opening {}", target);
        open::that_detached(target.as_str()).map_err(|e| LauncherError::OpenFailed {
            target: target.to_string(),
            message: e.to_string(),
        })
    }
}
