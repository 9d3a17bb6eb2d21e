use serde::{Deserialize, Serialize};

/// Top-level panels reachable from the sidebar. Only `NewRequests` has a screen of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    NewRequests,
    Estimate,
    EventsList,
    PartialRequests,
    Positions,
    Contractors,
    Admins,
    Clients,
    Coordinators,
    Profile,
}

/// Collapsible sidebar groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuGroup {
    Events,
    Users,
}

/// One top-level sidebar row: a collapsible group or a section of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Group(MenuGroup),
    Leaf(Section),
}

/// Top-level sidebar rows, in display order.
pub const MENU: [MenuItem; 5] = [
    MenuItem::Group(MenuGroup::Events),
    MenuItem::Leaf(Section::Positions),
    MenuItem::Leaf(Section::Contractors),
    MenuItem::Group(MenuGroup::Users),
    MenuItem::Leaf(Section::Profile),
];

impl MenuGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MenuGroup::Events => "Events",
            MenuGroup::Users => "Users",
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        match self {
            MenuGroup::Events => &[
                Section::NewRequests,
                Section::Estimate,
                Section::EventsList,
                Section::PartialRequests,
            ],
            MenuGroup::Users => &[Section::Admins, Section::Clients, Section::Coordinators],
        }
    }
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::NewRequests => "new-requests",
            Section::Estimate => "estimate",
            Section::EventsList => "events-list",
            Section::PartialRequests => "partial-requests",
            Section::Positions => "positions",
            Section::Contractors => "contractors",
            Section::Admins => "admins",
            Section::Clients => "clients",
            Section::Coordinators => "coordinators",
            Section::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::NewRequests => "New Requests",
            Section::Estimate => "Estimate",
            Section::EventsList => "Events",
            Section::PartialRequests => "Partial Requests",
            Section::Positions => "Positions",
            Section::Contractors => "Contractors",
            Section::Admins => "Admins",
            Section::Clients => "Clients",
            Section::Coordinators => "Coordinators",
            Section::Profile => "Profile",
        }
    }

    /// Static counter shown next to the menu label.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Section::NewRequests => Some("6"),
            _ => None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, Section::NewRequests)
    }

    /// Heading of the "under development" panel: the id with its first letter upper-cased and
    /// its first `-` turned into a space, so `events-list` reads `Events list`.
    pub fn placeholder_title(&self) -> String {
        let id = self.id().replacen('-', " ", 1);
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub const PLACEHOLDER_MESSAGE: &str = "This section is under development.";
