pub(super) mod v0001_initial_version;
pub(super) mod v0002_shape_types;
pub(super) mod v0003_fullbleed_to_background;
pub(super) mod v0004_rotation_angle;
pub(super) mod v0005_font_objects;
pub(super) mod v0006_padding_objects;
pub(super) mod v0007_color_objects;
pub(super) mod v0008_background_overlay_paint;
pub(super) mod v0009_remove_link_type;
pub(super) mod v0010_inline_text_formatting;
pub(super) mod v0011_default_background_element;
pub(super) mod v0012_animation_targets;
pub(super) mod v0013_element_groups;
