use std::f32::consts::TAU;

use egui::{Pos2, Rect, Stroke, Vec2, pos2, vec2};

use super::{GhostShape, ghost_color};
use crate::geometry::{center_of, min_dimension, point_on_circle};

const SUN_RAYS: usize = 12;
const SUN_RAY_LENGTH: f32 = 60.0;
const FLAME_LENGTH: f32 = 80.0;
const DINO_SPIKES: usize = 5;
const DINO_CORNER_RADIUS: f32 = 120.0;
const DINO_LEG_LENGTH: f32 = 80.0;
const DRAGON_SCALES: usize = 5;
const DRAGON_SCALE_RADIUS: f32 = 18.0;

pub(super) fn sun(size: Vec2) -> Vec<GhostShape> {
    let radius = min_dimension(size) * 0.25;
    let center = center_of(size);
    let ray = Stroke::new(12.0, ghost_color(0xF9, 0x73, 0x16));

    let mut shapes = Vec::with_capacity(SUN_RAYS + 1);
    shapes.push(GhostShape::Circle {
        center,
        radius,
        stroke: Stroke::new(12.0, ghost_color(0xF5, 0x9E, 0x0B)),
    });
    shapes.extend((0..SUN_RAYS).map(|index| {
        let angle = TAU / SUN_RAYS as f32 * index as f32;
        GhostShape::Line {
            from: point_on_circle(center, radius, angle),
            to: point_on_circle(center, radius + SUN_RAY_LENGTH, angle),
            stroke: ray,
        }
    }));
    shapes
}

pub(super) fn rocket(size: Vec2) -> Vec<GhostShape> {
    let width = min_dimension(size) * 0.35;
    let height = min_dimension(size) * 0.55;
    let center = center_of(size);
    let top = center.y - height / 2.0;
    let shoulders = center.y - height * 0.25;
    let base = center.y + height / 2.0;
    let left = center.x - width / 2.0;
    let right = center.x + width / 2.0;

    let hull = Stroke::new(10.0, ghost_color(0x25, 0xA6, 0xF7));
    let flame = Stroke::new(12.0, ghost_color(0xF9, 0x73, 0x16));

    vec![
        GhostShape::Polygon {
            points: vec![
                pos2(center.x, top),
                pos2(right, shoulders),
                pos2(left, shoulders),
            ],
            stroke: hull,
        },
        GhostShape::Rect {
            rect: Rect::from_min_size(pos2(left, shoulders), vec2(width, height * 0.5)),
            corner_radius: 0.0,
            stroke: hull,
        },
        GhostShape::Oval {
            rect: Rect::from_min_size(
                pos2(center.x - width * 0.2, center.y - height * 0.05),
                vec2(width * 0.4, height * 0.2),
            ),
            stroke: hull,
        },
        GhostShape::Line {
            from: pos2(left, base),
            to: pos2(center.x - width * 0.4, base + FLAME_LENGTH),
            stroke: flame,
        },
        GhostShape::Line {
            from: pos2(right, base),
            to: pos2(center.x + width * 0.4, base + FLAME_LENGTH),
            stroke: flame,
        },
    ]
}

pub(super) fn dinosaur(size: Vec2) -> Vec<GhostShape> {
    let body_width = min_dimension(size) * 0.5;
    let body_height = min_dimension(size) * 0.3;
    let center = center_of(size);
    let body = Rect::from_center_size(center, vec2(body_width, body_height));

    let skin = Stroke::new(12.0, ghost_color(0x22, 0xC5, 0x5E));
    let spike = Stroke::new(10.0, ghost_color(0xFA, 0xCC, 0x15));

    let mut shapes = Vec::with_capacity(DINO_SPIKES + 4);
    shapes.push(GhostShape::Rect {
        rect: body,
        corner_radius: DINO_CORNER_RADIUS.min(body_width.min(body_height) / 2.0),
        stroke: skin,
    });
    shapes.push(GhostShape::Circle {
        center: pos2(center.x + body_width / 2.0, center.y - body_height * 0.3),
        radius: body_height * 0.6,
        stroke: skin,
    });

    let spike_spacing = body_width / (DINO_SPIKES - 1) as f32;
    shapes.extend((0..DINO_SPIKES).map(|index| {
        let x = body.min.x + index as f32 * spike_spacing;
        GhostShape::Line {
            from: pos2(x, body.min.y - 20.0),
            to: pos2(x + body_width / 8.0, body.min.y - 60.0),
            stroke: spike,
        }
    }));

    for fraction in [0.1, 0.5] {
        let x = body.min.x + body_width * fraction;
        shapes.push(GhostShape::Line {
            from: pos2(x, body.max.y),
            to: pos2(x, body.max.y + DINO_LEG_LENGTH),
            stroke: skin,
        });
    }
    shapes
}

pub(super) fn house(size: Vec2) -> Vec<GhostShape> {
    let width = min_dimension(size) * 0.5;
    let height = min_dimension(size) * 0.35;
    let center = center_of(size);
    let walls = Rect::from_center_size(center, vec2(width, height));

    let brick = Stroke::new(12.0, ghost_color(0xF9, 0x73, 0x16));
    let trim = Stroke::new(10.0, ghost_color(0x25, 0xA6, 0xF7));
    let window_size = vec2(width * 0.2, height * 0.2);

    vec![
        GhostShape::Rect {
            rect: walls,
            corner_radius: 0.0,
            stroke: brick,
        },
        GhostShape::Polygon {
            points: vec![
                pos2(center.x, walls.min.y - height * 0.6),
                pos2(walls.min.x - width * 0.1, walls.min.y),
                pos2(walls.max.x + width * 0.1, walls.min.y),
            ],
            stroke: brick,
        },
        // door
        GhostShape::Rect {
            rect: Rect::from_min_size(
                pos2(center.x - width * 0.15, walls.min.y + height * 0.45),
                vec2(width * 0.3, height * 0.55),
            ),
            corner_radius: 0.0,
            stroke: trim,
        },
        GhostShape::Rect {
            rect: Rect::from_min_size(
                pos2(walls.min.x + width * 0.1, walls.min.y + height * 0.2),
                window_size,
            ),
            corner_radius: 0.0,
            stroke: trim,
        },
        GhostShape::Rect {
            rect: Rect::from_min_size(
                pos2(walls.min.x + width * 0.7, walls.min.y + height * 0.2),
                window_size,
            ),
            corner_radius: 0.0,
            stroke: trim,
        },
    ]
}

pub(super) fn dragon(size: Vec2) -> Vec<GhostShape> {
    let at = |fx: f32, fy: f32| -> Pos2 { pos2(size.x * fx, size.y * fy) };
    let scale_color = ghost_color(0xFA, 0xCC, 0x15);
    let pink = ghost_color(0xEC, 0x48, 0x99);
    let outline = Stroke::new(10.0, pink);

    let mut shapes = Vec::with_capacity(DRAGON_SCALES + 4);
    shapes.push(GhostShape::QuadPath {
        start: at(0.15, 0.7),
        segments: vec![
            [at(0.25, 0.4), at(0.5, 0.55)],
            [at(0.8, 0.75), at(0.85, 0.35)],
        ],
        stroke: Stroke::new(12.0, pink),
    });
    shapes.push(GhostShape::Circle {
        center: at(0.85, 0.3),
        radius: min_dimension(size) * 0.08,
        stroke: outline,
    });
    shapes.push(GhostShape::Line {
        from: at(0.45, 0.45),
        to: at(0.35, 0.25),
        stroke: outline,
    });
    shapes.push(GhostShape::Line {
        from: at(0.55, 0.5),
        to: at(0.65, 0.3),
        stroke: outline,
    });
    shapes.extend((0..DRAGON_SCALES).map(|index| GhostShape::FilledCircle {
        center: at(0.2 + index as f32 * 0.12, 0.6),
        radius: DRAGON_SCALE_RADIUS,
        color: scale_color,
    }));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_sun_rays_start_on_the_circle() {
        let size = vec2(800.0, 400.0);
        let shapes = sun(size);
        assert_eq!(shapes.len(), 13);

        let GhostShape::Circle { center, radius, .. } = shapes[0] else {
            panic!("sun should start with its disc");
        };
        assert!(close(radius, 100.0));
        assert_eq!(center, pos2(400.0, 200.0));

        for shape in &shapes[1..] {
            let GhostShape::Line { from, to, .. } = shape else {
                panic!("expected a ray");
            };
            assert!(close(from.distance(center), radius));
            assert!(close(to.distance(center), radius + SUN_RAY_LENGTH));
        }
    }

    #[test]
    fn test_rocket_nose_sits_on_body() {
        let shapes = rocket(vec2(1000.0, 1000.0));
        assert_eq!(shapes.len(), 5);

        let GhostShape::Polygon { points, .. } = &shapes[0] else {
            panic!("expected the nose cone");
        };
        let GhostShape::Rect { rect, .. } = &shapes[1] else {
            panic!("expected the body");
        };
        assert_eq!(points.len(), 3);
        assert!(close(points[1].y, rect.min.y));
        assert!(close(points[2].x, rect.min.x));
        assert!(close(rect.width(), 350.0));
        assert!(close(rect.height(), 275.0));
    }

    #[test]
    fn test_dinosaur_corner_radius_is_clamped() {
        let shapes = dinosaur(vec2(200.0, 200.0));
        assert_eq!(shapes.len(), 9);
        let GhostShape::Rect {
            rect, corner_radius, ..
        } = &shapes[0]
        else {
            panic!("expected the body");
        };
        assert!(close(*corner_radius, rect.height() / 2.0));

        let big = dinosaur(vec2(2000.0, 2000.0));
        let GhostShape::Rect { corner_radius, .. } = &big[0] else {
            panic!("expected the body");
        };
        assert_eq!(*corner_radius, DINO_CORNER_RADIUS);
    }

    #[test]
    fn test_house_roof_overhangs_walls() {
        let shapes = house(vec2(600.0, 800.0));
        assert_eq!(shapes.len(), 5);
        let GhostShape::Rect { rect: walls, .. } = &shapes[0] else {
            panic!("expected the walls");
        };
        let GhostShape::Polygon { points, .. } = &shapes[1] else {
            panic!("expected the roof");
        };
        assert!(points[1].x < walls.min.x);
        assert!(points[2].x > walls.max.x);
        assert!(points[0].y < walls.min.y);
    }

    #[test]
    fn test_dragon_scales_are_filled() {
        let shapes = dragon(vec2(500.0, 300.0));
        assert_eq!(shapes.len(), 9);
        let scales = shapes
            .iter()
            .filter(|shape| matches!(shape, GhostShape::FilledCircle { .. }))
            .count();
        assert_eq!(scales, DRAGON_SCALES);
        assert!(matches!(
            &shapes[0],
            GhostShape::QuadPath { segments, .. } if segments.len() == 2
        ));
    }
}
