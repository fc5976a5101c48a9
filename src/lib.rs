//! # navguard
//!
//! Client-side navigation guard for an auth-gated single-page application.
//! Owns the route table, the authentication-aware navigation decision, and
//! the login/logout session flow over a persisted credential store.
//!
//! The platform seams (credential storage, session history) are traits so
//! the whole library runs natively under `cargo test`; a browser embedding
//! supplies `localStorage`- and History-API-backed implementations and
//! feeds DOM events into [`NavigationGuard::navigate`] and
//! [`NavigationGuard::handle_pop`].

pub mod auth;
pub mod guard;
pub mod history;
pub mod policy;
pub mod route;
pub mod session;
pub mod store;

pub use auth::{AuthOracle, TokenAuthOracle};
pub use guard::NavigationGuard;
pub use history::{HistoryAdapter, MemoryHistory};
pub use policy::{GuardPolicy, RouteClass};
pub use route::{NavOrigin, NavigationRequest, RouteTable};
pub use session::{Session, UserProfile};
pub use store::{CredentialStore, MemoryStore};
