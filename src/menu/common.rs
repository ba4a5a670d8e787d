use bevy::prelude::*;

pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.20, 0.46)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.22, 0.44, 0.85)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.78, 0.88, 1.0)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn confirm_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn confirm_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn confirm_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn back_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
pub(super) fn back_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn back_text() -> Color {
    Color::srgb(0.55, 0.55, 0.70)
}
pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.06, 0.09, 0.18)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.22, 0.38, 0.72)
}
pub(super) fn track_color() -> Color {
    Color::srgb(0.45, 0.45, 0.50)
}
pub(super) fn handle_color() -> Color {
    Color::srgb(0.92, 0.92, 0.96)
}
pub(super) fn check_color() -> Color {
    Color::srgb(0.18, 0.80, 0.30)
}

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Set the colour of every text child of a button. Used by the interaction
/// systems to tint labels on hover and restore them afterwards.
pub(super) fn set_text_color(
    children: &Children,
    texts: &mut Query<&mut TextColor>,
    color: Color,
) {
    for child in children.iter() {
        if let Ok(mut text_color) = texts.get_mut(child) {
            *text_color = TextColor(color);
        }
    }
}
