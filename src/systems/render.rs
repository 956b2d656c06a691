use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::{Animation, Facing};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{AnimationSet, SpriteClip};
use crate::resources::texturestore::TextureStore;

/// Source rectangle selecting `frame_index` from a vertical-strip clip.
///
/// Rows are `frame_index * frame_height` down from the top of the sheet.
/// Facing left negates the source width, which is raylib's convention for
/// mirroring a frame horizontally in `draw_texture_pro`.
pub fn source_rect(clip: &SpriteClip, frame_index: usize, facing: Facing) -> Rectangle {
    let width = match facing {
        Facing::Left => -clip.frame_width,
        Facing::Right => clip.frame_width,
    };
    Rectangle {
        x: 0.0,
        y: frame_index as f32 * clip.frame_height,
        width,
        height: clip.frame_height,
    }
}

/// Exclusive render system.
///
/// Temporarily takes the raylib handle and thread out of the world so the
/// draw handle can borrow them while [`render_pass`] still queries the ECS.
pub fn render_system(world: &mut World) {
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass(world, &mut d);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw every animated sprite at its current frame.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let to_draw: Vec<(MapPosition, Animation, AnimationSet)> = {
        let mut q = world.query::<(&MapPosition, &Animation, &AnimationSet)>();
        q.iter(world)
            .map(|(p, a, s)| (*p, a.clone(), s.clone()))
            .collect()
    };

    let textures = world.non_send_resource::<TextureStore>();

    for (pos, anim, set) in to_draw.iter() {
        let clip = set.clip(anim.variant);
        if let Some(tex) = textures.get(&clip.tex_key) {
            let src = source_rect(clip, anim.frame_index, anim.facing);

            // Destination places the frame at the entity position, unscaled
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: clip.frame_width,
                height: clip.frame_height,
            };

            d.draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_384_by_6() -> SpriteClip {
        SpriteClip::from_sheet("idle", 48, 384, 6, 0.1).unwrap()
    }

    #[test]
    fn test_source_rect_row_is_index_times_frame_height() {
        let clip = clip_384_by_6();
        let rect = source_rect(&clip, 3, Facing::Right);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 192.0);
        assert_eq!(rect.width, 48.0);
        assert_eq!(rect.height, 64.0);
    }

    #[test]
    fn test_source_rect_last_valid_frame() {
        let clip = clip_384_by_6();
        let rect = source_rect(&clip, clip.frame_count - 1, Facing::Right);
        assert_eq!(rect.y, 320.0);
        assert!(rect.y + rect.height <= 384.0);
    }

    #[test]
    fn test_source_rect_facing_left_negates_width() {
        let clip = clip_384_by_6();
        let rect = source_rect(&clip, 0, Facing::Left);
        assert_eq!(rect.width, -48.0);
        assert_eq!(rect.height, 64.0);
    }
}
