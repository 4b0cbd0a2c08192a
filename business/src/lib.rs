pub mod application {
    pub mod user {
        pub mod delete;
        pub mod follow;
        pub mod get_or_create;
        pub mod get_profile;
        pub mod unfollow;
        pub mod update_profile;
        pub mod update_username;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod id_generator;
    pub mod logger;
    pub mod user {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod follow;
            pub mod get_or_create;
            pub mod get_profile;
            pub mod update_profile;
            pub mod update_username;
        }
    }
}
