// Outbound view snapshots: what the screen shows after a command.
//
// Boundaries
// - Read only projections of `App`. Built fresh per output line, borrowing from the app.

use serde::Serialize;

use crate::modules::event_details::core::reference::Choice;
use crate::modules::event_details::core::session::{DetailsTab, EventDetails};
use crate::modules::event_requests::core::event_request::EventRequest;
use crate::modules::event_requests::use_cases::list_event_requests::pager::Pager;
use crate::modules::navigation::core::section::{MENU, MenuGroup, MenuItem, Section};
use crate::modules::navigation::core::sidebar::SidebarState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListScreen<'a> {
    pub search_term: &'a str,
    pub current_page: usize,
    pub rows: Vec<&'a EventRequest>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub pager: Pager,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub id: DetailsTab,
    pub label: &'static str,
    pub active: bool,
}

impl TabView {
    pub fn all(active: DetailsTab) -> Vec<TabView> {
        DetailsTab::ALL
            .iter()
            .map(|tab| TabView {
                id: *tab,
                label: tab.label(),
                active: *tab == active,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsScreen<'a> {
    pub tabs: Vec<TabView>,
    pub selected_room: Option<&'a str>,
    pub details: EventDetails,
    pub coordinators: &'static [Choice],
    pub contractors: &'static [Choice],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen<'a> {
    List(ListScreen<'a>),
    Details(DetailsScreen<'a>),
    Placeholder {
        title: String,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub section: Section,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub active: bool,
}

impl MenuEntry {
    fn new(section: Section, active_section: Section) -> Self {
        Self {
            section,
            label: section.label(),
            badge: section.badge(),
            active: section == active_section,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItemView {
    Group {
        group: MenuGroup,
        label: &'static str,
        expanded: bool,
        /// Empty while collapsed.
        entries: Vec<MenuEntry>,
    },
    Leaf(MenuEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    pub open: bool,
    pub active_section: Section,
    pub items: Vec<MenuItemView>,
}

impl SidebarView {
    pub fn new(state: &SidebarState) -> Self {
        let items = MENU
            .iter()
            .map(|item| match *item {
                MenuItem::Group(group) => {
                    let expanded = state.is_expanded(group);
                    let entries = if expanded {
                        group
                            .sections()
                            .iter()
                            .map(|section| MenuEntry::new(*section, state.active_section))
                            .collect()
                    } else {
                        Vec::new()
                    };
                    MenuItemView::Group {
                        group,
                        label: group.label(),
                        expanded,
                        entries,
                    }
                }
                MenuItem::Leaf(section) => {
                    MenuItemView::Leaf(MenuEntry::new(section, state.active_section))
                }
            })
            .collect();
        Self {
            open: state.open,
            active_section: state.active_section,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub sidebar: SidebarView,
    pub create_modal_open: bool,
    pub screen: Screen<'a>,
}

/// One stdout line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Output<'a> {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        notification: Option<&'static str>,
        view: Snapshot<'a>,
    },
    Error {
        error: String,
    },
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_flag_only_the_active_tab() {
        let tabs = TabView::all(DetailsTab::GenerateSow);
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs.iter().filter(|t| t.active).count(), 1);
        assert!(tabs[3].active);
        assert_eq!(tabs[3].label, "Generate SOW");
    }

    fn labels(view: &SidebarView) -> Vec<&'static str> {
        view.items
            .iter()
            .map(|item| match item {
                MenuItemView::Group { label, .. } => *label,
                MenuItemView::Leaf(entry) => entry.label,
            })
            .collect()
    }

    #[rstest]
    fn it_should_list_the_top_level_items_in_menu_order() {
        let view = SidebarView::new(&SidebarState::default());
        assert_eq!(
            labels(&view),
            vec!["Events", "Positions", "Contractors", "Users", "Profile"]
        );
    }

    #[rstest]
    fn it_should_hide_the_entries_of_collapsed_groups() {
        let view = SidebarView::new(&SidebarState::default());
        let MenuItemView::Group {
            expanded, entries, ..
        } = &view.items[0]
        else {
            panic!("expected the events group");
        };
        assert!(*expanded);
        assert_eq!(entries.len(), 4);
        assert!(entries[0].active);
        assert_eq!(entries[0].badge, Some("6"));

        let MenuItemView::Group {
            expanded, entries, ..
        } = &view.items[3]
        else {
            panic!("expected the users group");
        };
        assert!(!*expanded);
        assert!(entries.is_empty());
    }

    #[rstest]
    fn it_should_mark_an_active_leaf_section() {
        let state = SidebarState {
            active_section: Section::Contractors,
            ..SidebarState::default()
        };
        let view = SidebarView::new(&state);
        let MenuItemView::Leaf(entry) = &view.items[2] else {
            panic!("expected the contractors leaf");
        };
        assert_eq!(entry.section, Section::Contractors);
        assert!(entry.active);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["items"][2]["kind"], "leaf");
        assert_eq!(json["items"][2]["active"], true);
        assert_eq!(json["items"][0]["kind"], "group");
        assert_eq!(json["items"][0]["entries"][0]["badge"], "6");
        assert!(json["items"][1].get("badge").is_none());
    }

    #[rstest]
    fn it_should_tag_the_output_line() {
        let line = serde_json::to_value(Output::Error {
            error: "boom".into(),
        })
        .unwrap();
        assert_eq!(line, serde_json::json!({"status": "error", "error": "boom"}));
    }

    #[rstest]
    fn it_should_tag_the_placeholder_screen() {
        let screen = serde_json::to_value(Screen::Placeholder {
            title: "Profile".into(),
            message: "This section is under development.",
        })
        .unwrap();
        assert_eq!(screen["screen"], "placeholder");
        assert_eq!(screen["title"], "Profile");
    }
}
