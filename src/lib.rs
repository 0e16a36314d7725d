//! # Catalog Browser
//!
//! A product catalog browser: search, sort and stock filtering over a fixed
//! product list, plus a per-session shopping basket.
//!
//! ## Design
//!
//! The pure parts carry no state of their own:
//! - [`catalog`] turns a product list and a [`CatalogQuery`](catalog::CatalogQuery)
//!   into the visible list and its result indicator.
//! - [`basket`] is an immutable ledger. Every operation returns a new [`Basket`](basket::Basket).
//!
//! Everything that changes over time lives in one place. A
//! [`SessionActor`](framework::SessionActor) runs in its own Tokio task and owns
//! every open [`Session`](session_actor::Session). Requests arrive over an mpsc
//! channel and each one gets a single oneshot reply, so sessions are updated
//! sequentially without locks. The catalog is injected into `run()` as a
//! shared `Arc`, not at construction time.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The actor loop, its request enum, the raw handle and a [`MockClient`](framework::mock::MockClient)
//! for testing callers without a running actor.
//!
//! ### 2. The Entity ([`session_actor`])
//! Per-session state: the active query, the cached visible list and the basket.
//! Recomputes the visible list whenever the query changes.
//!
//! ### 3. The Interface ([`clients`])
//! [`SessionClient`](clients::SessionClient) maps the page's controls onto typed
//! requests and turns framework errors into [`SessionError`](session_actor::SessionError).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`BrowserSystem`](lifecycle::BrowserSystem) spawns the actor and shuts it down;
//! [`setup_tracing`](lifecycle::setup_tracing) installs the log subscriber.
//!
//! ### 5. The Front End ([`commands`], [`presentation`], [`terminal`])
//! A line-oriented stand-in for the page.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod basket;
pub mod catalog;
pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod presentation;
pub mod session_actor;
pub mod terminal;
