pub mod shared {
    pub mod core {
        pub mod clock;
    }
}

pub mod modules {
    pub mod tracking {
        pub mod core {
            pub mod day_window;
            pub mod duration_format;
            pub mod errors;
            pub mod ports;
            pub mod project;
            pub mod record;
            pub mod tracking_state;
        }
        pub mod use_cases {
            pub mod track {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod status {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod projects {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod records {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projects_in_memory;
                pub mod records_in_memory;
            }
        }
    }
}

pub mod shell;
