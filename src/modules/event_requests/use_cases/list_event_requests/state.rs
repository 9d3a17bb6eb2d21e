// Search and paging state of the request list.
//
// Responsibilities
// - Apply one list action at a time as a pure transition.
// - Changing the search term keeps the current page. A narrower search can therefore leave the
//   list on a page past the end, which renders empty until the user pages back.

use std::num::NonZeroUsize;

use crate::modules::event_requests::core::event_request::EventRequest;
use crate::modules::event_requests::use_cases::list_event_requests::pager::{
    Pager, next_page, previous_page,
};
use crate::modules::event_requests::use_cases::list_event_requests::query::{
    EventPage, list_events,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search_term: String,
    pub current_page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetSearchTerm(String),
    GoToPage(usize),
    PreviousPage,
    NextPage,
}

impl ListState {
    pub fn page<'a>(&self, events: &'a [EventRequest], page_size: NonZeroUsize) -> EventPage<'a> {
        list_events(events, &self.search_term, self.current_page, page_size)
    }

    pub fn pager(&self, total_matches: usize, page_size: NonZeroUsize) -> Pager {
        Pager::new(self.current_page, page_size, total_matches)
    }
}

/// `total_pages` is the page count for the state's current search term.
pub fn evolve(state: ListState, action: ListAction, total_pages: usize) -> ListState {
    match action {
        ListAction::SetSearchTerm(search_term) => ListState {
            search_term,
            ..state
        },
        ListAction::GoToPage(page) => ListState {
            current_page: page.max(1),
            ..state
        },
        ListAction::PreviousPage => match previous_page(state.current_page) {
            Some(current_page) => ListState {
                current_page,
                ..state
            },
            None => state,
        },
        ListAction::NextPage => match next_page(state.current_page, total_pages) {
            Some(current_page) => ListState {
                current_page,
                ..state
            },
            None => state,
        },
    }
}
