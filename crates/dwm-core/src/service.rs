//! Window listing and activation on top of a [`WindowSystem`].

use crate::error::{DwmError, DwmResult};
use crate::selector::Selector;
use crate::show::ShowMode;
use crate::system::WindowSystem;
use crate::window::{WindowFilter, WindowHandle, WindowInfo};
use tracing::{debug, info, warn};

/// Lists and activates windows through a native backend.
#[derive(Debug)]
pub struct WindowService<S> {
    system: S,
}

impl<S: WindowSystem> WindowService<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn host_name(&self) -> DwmResult<String> {
        Ok(self.system.host_name()?)
    }

    /// Visible, titled top-level windows matching every part of `filter`, in
    /// enumeration order.
    ///
    /// A window whose title cannot be read is skipped rather than aborting the
    /// pass. Process-id failures are surfaced unless the window vanished.
    pub fn list_windows(&self, filter: &WindowFilter) -> DwmResult<Vec<WindowInfo>> {
        let handles = self.system.top_level_windows()?;
        debug!(count = handles.len(), ?filter, "enumerated top-level windows");

        let mut windows = Vec::new();
        for handle in handles {
            if let Some(info) = self.inspect(handle, filter)? {
                windows.push(info);
            }
        }

        debug!(matched = windows.len(), "window listing complete");
        Ok(windows)
    }

    fn inspect(&self, handle: WindowHandle, filter: &WindowFilter) -> DwmResult<Option<WindowInfo>> {
        if !self.system.is_visible(handle) {
            return Ok(None);
        }

        let title = match self.system.window_text(handle) {
            Ok(title) => title,
            Err(e) if e.is_stale_handle() => {
                debug!(%handle, "window vanished before its title was read");
                return Ok(None);
            }
            Err(e) => {
                warn!(%handle, error = %e, "skipping window with unreadable title");
                return Ok(None);
            }
        };
        if title.is_empty() || !filter.matches_title(&title) {
            return Ok(None);
        }

        let mut info = WindowInfo::new(handle, title);
        if filter.needs_pid() {
            let pid = match self.system.process_id(handle) {
                Ok(pid) => pid,
                Err(e) if e.is_stale_handle() => {
                    debug!(%handle, "window vanished before its owner was read");
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            };
            if !filter.matches_pid(pid) {
                return Ok(None);
            }
            info.pid = Some(pid);
        }

        Ok(Some(info))
    }

    /// Resolve a selector to a handle. Literal handles skip enumeration;
    /// lookups take the first match in enumeration order.
    pub fn resolve(&self, selector: &Selector) -> DwmResult<WindowHandle> {
        let filter = match selector {
            Selector::Handle(handle) => return Ok(*handle),
            Selector::Title(title) => WindowFilter::by_title(title.clone()),
            Selector::Pid(pid) => WindowFilter::by_pid(*pid),
        };

        self.list_windows(&filter)?
            .into_iter()
            .next()
            .map(|w| w.handle)
            .ok_or_else(|| DwmError::WindowNotFound(selector.to_string()))
    }

    /// Bring the selected window to the foreground, then apply `mode`.
    pub fn activate(&self, selector: &Selector, mode: ShowMode) -> DwmResult<WindowHandle> {
        let handle = self.resolve(selector)?;

        self.system.switch_to(handle)?;
        let was_visible = self.system.show(handle, mode);
        info!(%handle, %selector, %mode, was_visible, "activated window");

        Ok(handle)
    }
}
