pub mod shared {
    pub mod infrastructure {
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod actor;
            pub mod availability;
            pub mod booking;
            pub mod conflicts;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod history_record;
            pub mod intents;
            pub mod notifications;
            pub mod port_mirror;
            pub mod state;
            pub mod station;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod ledger;
            pub mod request_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod decide_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod recompute_availability {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_pending_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_requester_bookings {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod station_history {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_errors;
                pub mod identity;
            }
            pub mod outbound {
                pub mod booking_store;
                pub mod booking_store_in_memory;
                pub mod history_archive;
                pub mod history_archive_in_memory;
                pub mod intent_outbox;
                pub mod intent_relay;
                pub mod notifications;
                pub mod notifications_in_memory;
                pub mod stations;
                pub mod stations_in_memory;
                pub mod users;
                pub mod users_in_memory;
            }
        }
    }
}

pub mod shell;
