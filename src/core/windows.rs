use fnv::FnvHashMap;

/// Desktop apps the taskbar icons open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowId {
    About,
    Projects,
    Contact,
    Terminal,
}

impl WindowId {
    pub const ALL: [WindowId; 4] = [
        WindowId::About,
        WindowId::Projects,
        WindowId::Contact,
        WindowId::Terminal,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WindowId::About => "About Me",
            WindowId::Projects => "Projects",
            WindowId::Contact => "Contact",
            WindowId::Terminal => "Terminal",
        }
    }

    /// DOM element id of the window's root node.
    pub fn element_id(self) -> &'static str {
        match self {
            WindowId::About => "win-about",
            WindowId::Projects => "win-projects",
            WindowId::Contact => "win-contact",
            WindowId::Terminal => "win-terminal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowRecord {
    pub minimized: bool,
    pub maximized: bool,
    /// Stacking order; larger is in front. Never reused within a session.
    pub z: u64,
}

/// Pure window bookkeeping for the DOM desktop. The overlay layer mirrors
/// this state into element classes and z-index styles after every call.
pub struct WindowManager {
    windows: FnvHashMap<WindowId, WindowRecord>,
    next_z: u64,
    theme: Theme,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: FnvHashMap::default(),
            next_z: 1,
            theme: Theme::Dark,
        }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    #[inline]
    pub fn is_open(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    #[inline]
    pub fn record(&self, id: WindowId) -> Option<WindowRecord> {
        self.windows.get(&id).copied()
    }

    /// Open (or surface, if already open) a window. Always lands on top.
    pub fn open(&mut self, id: WindowId) {
        let z = self.bump_z();
        let rec = self.windows.entry(id).or_insert(WindowRecord {
            minimized: false,
            maximized: false,
            z,
        });
        rec.minimized = false;
        rec.z = z;
        log::debug!("[wm] open {:?} z={}", id, z);
    }

    pub fn close(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    pub fn minimize(&mut self, id: WindowId) {
        if let Some(rec) = self.windows.get_mut(&id) {
            rec.minimized = true;
        }
    }

    /// Taskbar click: restore a minimized window on top, focus an open one,
    /// open a closed one.
    pub fn restore_or_open(&mut self, id: WindowId) {
        let z = self.bump_z();
        match self.windows.get_mut(&id) {
            Some(rec) if rec.minimized => {
                rec.minimized = false;
                rec.z = z;
            }
            Some(rec) => rec.z = z,
            None => self.open(id),
        }
    }

    pub fn maximize_toggle(&mut self, id: WindowId) {
        let z = self.bump_z();
        if let Some(rec) = self.windows.get_mut(&id) {
            rec.maximized = !rec.maximized;
            rec.z = z;
        }
    }

    pub fn focus(&mut self, id: WindowId) {
        let z = self.bump_z();
        if let Some(rec) = self.windows.get_mut(&id) {
            rec.z = z;
        }
    }

    /// The visible window currently on top, if any.
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|(_, rec)| !rec.minimized)
            .max_by_key(|(_, rec)| rec.z)
            .map(|(id, _)| *id)
    }

    pub fn open_order(&self) -> Vec<(WindowId, WindowRecord)> {
        let mut list: Vec<_> = self.windows.iter().map(|(id, rec)| (*id, *rec)).collect();
        list.sort_by_key(|(_, rec)| rec.z);
        list
    }

    fn bump_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
