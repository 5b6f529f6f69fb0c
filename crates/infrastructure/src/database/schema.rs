// Database schema for users and their watchlists
diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,             // Natural lookup key, unique
        full_name -> Text,
        is_admin -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    watchlists (id) {
        id -> Integer,
        name -> Text,
        user_id -> Integer,
        watchlist_type -> Text,    // entry, breakout
        stocks -> Text,            // JSON array of stock entries
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(watchlists -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, watchlists,);
