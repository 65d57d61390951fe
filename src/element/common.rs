use super::Element;

// Page coordinate space shared by every element
pub const PAGE_WIDTH: f64 = 412.0;
pub const PAGE_HEIGHT: f64 = 618.0;

/// Fields a media element hands over when combined into another element
pub const MEDIA_PROPERTIES: &[&str] = &["resource", "scale", "focalX", "focalY", "flip"];

/// Stretches an element over the whole page
pub(crate) fn fill_page(element: &mut Element) {
    element.x = 0.0;
    element.y = 0.0;
    element.width = PAGE_WIDTH;
    element.height = PAGE_HEIGHT;
    element.rotation_angle = 0.0;
}
