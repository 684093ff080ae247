pub mod street_view;

pub use street_view::StreetViewClient;
