mod http;

pub use http::HttpStatsSource;
