//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod notice_feed;

pub use clock::Clock;
pub use notice_feed::NoticeFeed;
