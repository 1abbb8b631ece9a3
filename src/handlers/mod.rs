pub mod github;


pub use github::configure_github_routes;
