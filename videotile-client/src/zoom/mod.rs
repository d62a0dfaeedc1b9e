//! Browser implementations: the Zoom Video SDK behind [`VideoClient`](crate::VideoClient)
//! and DOM containers behind [`SurfaceSink`](crate::SurfaceSink).

mod bindings;
mod client;
mod dom_sink;

pub use client::{ZoomSubscription, ZoomVideoClient};
pub use dom_sink::DomSurfaceSink;
