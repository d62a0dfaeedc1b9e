/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::video_client::ClientError;
use std::fmt;

/// A renderable video handle handed out by the SDK.
pub trait VideoSurface {
    /// Take the surface out of whatever tree it was placed in. Removing a
    /// surface that is already gone is a no-op.
    fn remove(&self);
}

/// A container that surfaces get appended to (the local or the remote tile).
pub trait SurfaceSink<S> {
    fn attach(&self, surface: &S) -> Result<(), ClientError>;

    /// Drop everything the container holds.
    fn clear(&self);
}

/// Which tile a participant's surface lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    Local,
    Remote,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Local => write!(f, "local"),
            Placement::Remote => write!(f, "remote"),
        }
    }
}
