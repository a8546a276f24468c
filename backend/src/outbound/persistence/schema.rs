//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly. When a
//! migration changes the schema, regenerate them with `diesel print-schema`
//! or update them by hand.

diesel::table! {
    /// Clients; `pesel` is unique.
    client (id_client) {
        id_client -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Nullable<Varchar>,
        telephone -> Nullable<Varchar>,
        pesel -> Varchar,
    }
}

diesel::table! {
    /// Trip catalogue.
    trip (id_trip) {
        id_trip -> Int4,
        name -> Varchar,
        description -> Varchar,
        date_from -> Date,
        date_to -> Date,
        max_people -> Int4,
    }
}

diesel::table! {
    country (id_country) {
        id_country -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Many-to-many link between countries and trips.
    country_trip (id_country, id_trip) {
        id_country -> Int4,
        id_trip -> Int4,
    }
}

diesel::table! {
    /// Registrations. Dates are `YYYYMMDD` integers.
    client_trip (id_client, id_trip) {
        id_client -> Int4,
        id_trip -> Int4,
        registered_at -> Int4,
        payment_date -> Nullable<Int4>,
    }
}

diesel::joinable!(country_trip -> country (id_country));
diesel::joinable!(country_trip -> trip (id_trip));
diesel::joinable!(client_trip -> client (id_client));
diesel::joinable!(client_trip -> trip (id_trip));

diesel::allow_tables_to_appear_in_same_query!(client, trip, country, country_trip, client_trip);
