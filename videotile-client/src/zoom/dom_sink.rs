use super::client::describe_js_error;
use crate::surface::{SurfaceSink, VideoSurface};
use crate::video_client::ClientError;
use web_sys::Element;

impl VideoSurface for Element {
    fn remove(&self) {
        Element::remove(self);
    }
}

/// Appends video elements to a DOM container, typically a
/// `<video-player-container>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DomSurfaceSink {
    container: Element,
}

impl DomSurfaceSink {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl SurfaceSink<Element> for DomSurfaceSink {
    fn attach(&self, surface: &Element) -> Result<(), ClientError> {
        self.container
            .append_child(surface)
            .map(|_| ())
            .map_err(|e| ClientError::Surface(describe_js_error(&e)))
    }

    fn clear(&self) {
        while let Some(child) = self.container.first_child() {
            if self.container.remove_child(&child).is_err() {
                break;
            }
        }
    }
}
