pub mod application {
    pub mod completion {
        pub mod delete;
        pub mod get_by_user;
        pub mod get_statistics;
        pub mod record;
    }
    pub mod course {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod recommendation {
        pub mod recommend;
        pub mod recommend_default;
        pub mod recommend_for_course;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod completion {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod statistics;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_user;
            pub mod get_statistics;
            pub mod record;
        }
    }
    pub mod course {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod recommendation {
        pub mod adjacency;
        pub mod errors;
        pub mod model;
        pub mod random;
        pub mod scoring;
        pub mod selection;
        pub mod use_cases {
            pub mod recommend;
            pub mod recommend_default;
            pub mod recommend_for_course;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
