//! Rendering backend seam.

use crate::NativeImageProps;

/// A native primitive that draws normalized image props.
///
/// The facade never inspects `Output`; it is whatever the host uses to
/// represent a rendered node.
pub trait ImageBackend {
    type Output;

    fn render(&self, props: NativeImageProps) -> Self::Output;
}
