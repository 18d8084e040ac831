//! # FOLIO Core
//!
//! Host-independent logic for the FOLIO portfolio page:
//! - Ambient particle field (continuous simulate + render)
//! - Scroll reveal scheduler (one-way visibility flags)
//! - Decision logic for theme, navigation, counters, pointer effects,
//!   carousel and contact form
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       PAGE PIPELINE                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  Host Event → Component Handler → Pure Decision → Adapter  │
//! │       ↓               ↓                 ↓            ↓     │
//! │  resize/scroll   ParticleField    RevealState    DOM/Canvas │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything the browser provides is a trait here ([`Surface`],
//! [`FrameScheduler`], [`PreferenceStore`]), so the whole crate runs and
//! tests natively. `folio_web` supplies the real implementations.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod frame;
pub mod layout;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod render;
pub mod reveal;
pub mod style;
pub mod text;
pub mod theme;

pub use animation::CountUp;
pub use carousel::Carousel;
pub use config::FolioConfig;
pub use contact::{ContactForm, Field, Validation};
pub use error::{FolioError, FolioResult};
pub use frame::{Coalesced, FrameScheduler, ManualScheduler};
pub use layout::{Rect, Viewport};
pub use nav::NavMenu;
pub use particles::{FieldStats, Particle, ParticleConfig, ParticleField};
pub use pointer::{PointerConfig, Tilt};
pub use render::{CommandBuffer, DrawCommand, Surface};
pub use reveal::{ElementId, IntersectionSample, RevealConfig, RevealScheduler, RevealState, RootMargin};
pub use style::Color;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};
