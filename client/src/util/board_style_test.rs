use canvas::engine::EngineCore;

use super::*;

fn frame() -> BoardFrame {
    EngineCore::default().frame()
}

#[test]
fn board_box_carries_size_and_transform() {
    assert_eq!(
        board_box_style(&frame()),
        "width: 2592px; height: 1472px; transform: scale(1) translate(-16px, -16px);"
    );
}

#[test]
fn animate_class_requires_no_drag() {
    let mut f = frame();
    f.animate = true;
    assert_eq!(board_box_class(&f), "memo-board__box memo-board__box--animate");
    f.dragging = true;
    assert_eq!(board_box_class(&f), "memo-board__box");
}

#[test]
fn scene_size() {
    assert_eq!(scene_style(&frame()), "width: 2560px; height: 1440px;");
}

#[test]
fn heavy_and_light_grid_lines() {
    let heavy = GridLine { axis: GridAxis::Vertical, position: 256.0, length: 1440.0, heavy: true };
    assert_eq!(grid_line_style(&heavy), "left: 256px; top: 0; height: 1440px; border-left: 2px solid;");
    let light = GridLine { axis: GridAxis::Horizontal, position: 48.0, length: 2560.0, heavy: false };
    assert_eq!(grid_line_style(&light), "top: 48px; left: 0; width: 2560px; border-top: 1px dashed;");
}

#[test]
fn card_position() {
    assert_eq!(
        card_style(Point::new(64.0, 96.5), 256.0, 192.0),
        "left: 64px; top: 96.5px; width: 256px; height: 192px;"
    );
}
