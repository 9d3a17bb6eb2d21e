// Sidebar state: active section, expanded groups and the compact-layout drawer.

use serde::Serialize;

use crate::modules::navigation::core::section::{MenuGroup, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub active_section: Section,
    pub events_expanded: bool,
    pub users_expanded: bool,
    /// Drawer visibility in compact layout.
    pub open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            active_section: Section::default(),
            events_expanded: true,
            users_expanded: false,
            open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    ChangeSection(Section),
    ToggleGroup(MenuGroup),
    ToggleOpen,
    Close,
}

impl SidebarState {
    pub fn is_expanded(&self, group: MenuGroup) -> bool {
        match group {
            MenuGroup::Events => self.events_expanded,
            MenuGroup::Users => self.users_expanded,
        }
    }
}

pub fn evolve(state: SidebarState, action: SidebarAction) -> SidebarState {
    match action {
        // Picking a section also closes the drawer.
        SidebarAction::ChangeSection(active_section) => SidebarState {
            active_section,
            open: false,
            ..state
        },
        SidebarAction::ToggleGroup(MenuGroup::Events) => SidebarState {
            events_expanded: !state.events_expanded,
            ..state
        },
        SidebarAction::ToggleGroup(MenuGroup::Users) => SidebarState {
            users_expanded: !state.users_expanded,
            ..state
        },
        SidebarAction::ToggleOpen => SidebarState {
            open: !state.open,
            ..state
        },
        SidebarAction::Close => SidebarState {
            open: false,
            ..state
        },
    }
}
