// Application state for one session and the command dispatcher.
//
// Responsibilities
// - Own every piece of state; apply one command to completion before the next.
// - Route each command to the pure transition of the module that owns the state.
// - The list keeps its search and page only while it is on screen, and the details session
//   lives exactly as long as the details view.

use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::modules::event_details::adapters::mock::mock_reference_data::{
    CONTRACTORS, COORDINATORS, mock_meeting_rooms, mock_positions,
};
use crate::modules::event_details::core::roster::{ADDED_MESSAGE, REMOVED_MESSAGE, RosterAction};
use crate::modules::event_details::core::session::{self, DetailsSession, SessionAction};
use crate::modules::event_requests::adapters::mock::mock_event_requests as mock;
use crate::modules::event_requests::core::catalog::EventCatalog;
use crate::modules::event_requests::use_cases::create_event_request::handler::{
    self as create_handler, CREATED_MESSAGE,
};
use crate::modules::event_requests::use_cases::list_event_requests::state::{
    self as list_state, ListAction, ListState,
};
use crate::modules::navigation::core::section::{PLACEHOLDER_MESSAGE, Section};
use crate::modules::navigation::core::sidebar::{self, SidebarAction, SidebarState};
use crate::modules::navigation::core::view::{self, NavigationAction, View};
use crate::shared::core::primitives::new_id;
use crate::shell::command::{Command, CommandError};
use crate::shell::config::Config;
use crate::shell::view::{DetailsScreen, ListScreen, Screen, SidebarView, Snapshot, TabView};

#[derive(Debug, Clone)]
pub struct App {
    page_size: NonZeroUsize,
    catalog: EventCatalog,
    list: ListState,
    view: View,
    sidebar: SidebarState,
    create_modal_open: bool,
    session: Option<DetailsSession>,
}

pub type Notification = &'static str;

impl App {
    pub fn new(config: &Config, catalog: EventCatalog) -> Self {
        Self {
            page_size: config.page_size,
            catalog,
            list: ListState::default(),
            view: View::default(),
            sidebar: SidebarState::default(),
            create_modal_open: false,
            session: None,
        }
    }

    /// Seeds the catalog from the mock generator.
    pub fn seeded(config: &Config) -> Self {
        let count = config.mock_event_count;
        let events = match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                mock::generate_mock_event_requests(&mut rng, count)
            }
            None => mock::generate_mock_event_requests(&mut rand::thread_rng(), count),
        };
        Self::new(config, EventCatalog::new(events))
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn session(&self) -> Option<&DetailsSession> {
        self.session.as_ref()
    }

    pub fn create_modal_open(&self) -> bool {
        self.create_modal_open
    }

    fn list_visible(&self) -> bool {
        self.view == View::List && self.sidebar.active_section == Section::NewRequests
    }

    fn apply_list(&mut self, action: ListAction) -> Result<(), CommandError> {
        if !self.list_visible() {
            return Err(CommandError::ListHidden);
        }
        let total_pages = self
            .list
            .page(self.catalog.events(), self.page_size)
            .total_pages;
        self.list = list_state::evolve(std::mem::take(&mut self.list), action, total_pages);
        Ok(())
    }

    fn apply_session(&mut self, action: SessionAction) -> Result<(), CommandError> {
        let session = self.session.take().ok_or(CommandError::NoOpenSession)?;
        self.session = Some(session::evolve(session, action));
        Ok(())
    }

    fn apply_roster(&mut self, action: RosterAction) -> Result<(), CommandError> {
        self.apply_session(SessionAction::Roster(action))
    }

    fn apply_sidebar(&mut self, action: SidebarAction) {
        self.sidebar = sidebar::evolve(std::mem::take(&mut self.sidebar), action);
    }

    fn navigate(&mut self, action: NavigationAction) {
        self.view = view::evolve(std::mem::take(&mut self.view), action);
        self.session = match self.view.selected_event_id() {
            Some(id) => {
                debug!(event_id = id, "details opened");
                Some(DetailsSession::open(
                    id,
                    self.catalog.find(id).cloned(),
                    mock_meeting_rooms(),
                    mock_positions(),
                ))
            }
            None => None,
        };
    }

    /// Applies one command. Returns the confirmation to show, if the action has one.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<Notification>, CommandError> {
        let notification = match command {
            Command::Render => None,
            Command::Search { term } => {
                self.apply_list(ListAction::SetSearchTerm(term))?;
                None
            }
            Command::GoToPage { page } => {
                self.apply_list(ListAction::GoToPage(page))?;
                None
            }
            Command::PreviousPage => {
                self.apply_list(ListAction::PreviousPage)?;
                None
            }
            Command::NextPage => {
                self.apply_list(ListAction::NextPage)?;
                None
            }
            Command::SelectEvent { id } => {
                if !self.list_visible() {
                    return Err(CommandError::ListHidden);
                }
                self.navigate(NavigationAction::Select(id));
                None
            }
            Command::Back => {
                self.navigate(NavigationAction::Back);
                None
            }
            Command::ChangeSection { section } => {
                self.apply_sidebar(SidebarAction::ChangeSection(section));
                None
            }
            Command::ToggleGroup { group } => {
                self.apply_sidebar(SidebarAction::ToggleGroup(group));
                None
            }
            Command::ToggleSidebar => {
                self.apply_sidebar(SidebarAction::ToggleOpen);
                None
            }
            Command::CloseSidebar => {
                self.apply_sidebar(SidebarAction::Close);
                None
            }
            Command::OpenCreateModal => {
                self.create_modal_open = true;
                None
            }
            Command::CloseCreateModal => {
                self.create_modal_open = false;
                None
            }
            Command::SubmitCreateEvent { form } => {
                if !self.create_modal_open {
                    return Err(CommandError::CreateModalClosed);
                }
                create_handler::handle(&mut self.catalog, form)?;
                self.create_modal_open = false;
                Some(CREATED_MESSAGE)
            }
            Command::SelectTab { tab } => {
                self.apply_session(SessionAction::SelectTab(tab))?;
                None
            }
            Command::AssignCoordinator { id } => {
                self.apply_session(SessionAction::AssignCoordinator(id))?;
                None
            }
            Command::SelectRoom { id } => {
                self.apply_session(SessionAction::SelectRoom(id))?;
                None
            }
            Command::AddPosition => {
                self.apply_roster(RosterAction::Add { id: new_id("pos") })?;
                Some(ADDED_MESSAGE)
            }
            Command::RemovePosition { id } => {
                self.apply_roster(RosterAction::Remove { id })?;
                Some(REMOVED_MESSAGE)
            }
            Command::AdjustQuantity { id, delta } => {
                self.apply_roster(RosterAction::AdjustQuantity { id, delta })?;
                None
            }
            Command::AssignContractor { id, contractor_id } => {
                self.apply_roster(RosterAction::AssignContractor { id, contractor_id })?;
                None
            }
            Command::SaveEdits => {
                let session = self.session.as_ref().ok_or(CommandError::NoOpenSession)?;
                Some(session.roster.save().message())
            }
        };

        // The list remounts fresh whenever it comes back on screen.
        if !self.list_visible() {
            self.list = ListState::default();
        }
        Ok(notification)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let screen = match (&self.view, &self.session) {
            (View::Details(_), Some(session)) => Screen::Details(DetailsScreen {
                tabs: TabView::all(session.active_tab),
                selected_room: session.selected_room.as_deref(),
                details: session.details(),
                coordinators: &COORDINATORS,
                contractors: &CONTRACTORS,
            }),
            _ if self.sidebar.active_section.is_implemented() => {
                let page = self.list.page(self.catalog.events(), self.page_size);
                Screen::List(ListScreen {
                    search_term: &self.list.search_term,
                    current_page: self.list.current_page,
                    pager: self.list.pager(page.total_matches, self.page_size),
                    total_matches: page.total_matches,
                    total_pages: page.total_pages,
                    rows: page.visible,
                })
            }
            _ => Screen::Placeholder {
                title: self.sidebar.active_section.placeholder_title(),
                message: PLACEHOLDER_MESSAGE,
            },
        };
        Snapshot {
            sidebar: SidebarView::new(&self.sidebar),
            create_modal_open: self.create_modal_open,
            screen,
        }
    }
}
