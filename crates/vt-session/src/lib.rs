//! `vt-session`: click selection and plan-and-drive orchestration.
//!
//! # Control flow
//!
//! ```text
//! select_point(a)   → selection [a]
//! select_point(b)   → selection [a, b]
//! start_driving()   → snap a, b to nodes → Router::route
//!                     → cancel old traversal → Traversal::start
//! tick() / run()    → one node per tick while the road layer is visible
//! select_point(c)   → selection [c], running traversal cancelled
//! ```
//!
//! Refused actions return an [`Advisory`] whose `Display` text is the
//! user-facing message.  They never touch the route, traversal or odometer.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Forwards to `vt-spatial/parallel`.              |
//! | `fx-hash`  | Forwards to `vt-spatial/fx-hash`.               |
//! | `serde`    | Serde derives on `Advisory` and all dependents. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_core::TraceConfig;
//! use vt_session::SessionBuilder;
//! use vt_traversal::{IntervalTicker, NoopObserver};
//!
//! let config = TraceConfig::default();
//! let mut session = SessionBuilder::new(config).polylines(roads).build()?;
//! session.select_point(start)?;
//! session.select_point(end)?;
//! session.start_driving()?;
//! let mut ticker = IntervalTicker::new(session.config().cadence());
//! session.run(&mut ticker, &mut NoopObserver);
//! println!("Distance Travelled: {}", session.distance_label());
//! ```

pub mod advisory;
pub mod builder;
pub mod error;
pub mod session;


pub use advisory::Advisory;
pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use session::{Click, Session};
