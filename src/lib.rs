// Crate entry point. Declares the module tree so the binary and the tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - `main.rs` and `tests/` import the shell and the modules from this crate root.

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod event_requests {
        pub mod core {
            pub mod catalog;
            pub mod event_request;
        }
        pub mod use_cases {
            pub mod create_event_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod list_event_requests {
                pub mod pager;
                pub mod query;
                pub mod state;
            }
        }
        pub mod adapters {
            pub mod mock {
                pub mod mock_event_requests;
            }
        }
    }
    pub mod event_details {
        pub mod core {
            pub mod position;
            pub mod reference;
            pub mod roster;
            pub mod session;
        }
        pub mod adapters {
            pub mod mock {
                pub mod mock_reference_data;
            }
        }
    }
    pub mod navigation {
        pub mod core {
            pub mod section;
            pub mod sidebar;
            pub mod view;
        }
    }
}

pub mod shell;
