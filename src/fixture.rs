//! The character tileset used as a test fixture: 16 tiles of 32x32 on a 4x4 sheet,
//! each with collision shapes, plus two identical six-color wang sets.

use glam::UVec2;
use crate::{Color, Grid, Image, Object, ObjectGroup, Orientation, Tile, Tileset, WangColor, WangSet, WangSetKind};

/// Collision box of each tile that only carries a single rectangle, as (tile, x, y, width, height).
const BODY_BOXES: [(u32, f32, f32, f32, f32); 12] = [
    (3, 7.0, 5.0, 17.0, 26.0),
    (4, 8.0, 7.0, 16.0, 23.0),
    (5, 8.0, 6.0, 16.0, 24.0),
    (6, 8.0, 7.0, 16.0, 23.0),
    (7, 8.0, 6.0, 16.0, 23.0),
    (8, 8.0, 7.0, 16.0, 23.0),
    (9, 8.0, 6.0, 16.0, 24.0),
    (10, 0.0, 0.0, 32.0, 32.0),
    (11, 8.0, 6.0, 16.0, 23.0),
    (13, 7.0, 6.0, 17.0, 25.0),
    (14, 7.0, 7.0, 17.0, 23.0),
    (15, 7.0, 6.0, 17.0, 25.0),
];

pub fn test_tileset() -> Tileset {
    let mut tileset = Tileset::new("test", UVec2::splat(32), 16, 4)
        .with_grid(Grid::new(Orientation::Orthogonal, 1, 1))
        .with_image(Image::new("test_character.png", 128, 128))
        .with_tile(Tile::new(0).with_objects(ObjectGroup::new(4)
            .with(Object::rect(28, 7.0, 6.0, 17.0, 24.0).with_name("AABB"))
            .with(Object::polygon(29, 1.81818, 6.36364, [(0.0, 0.0), (26.3636, -4.0), (14.9091, 24.7273)]))
        ))
        .with_tile(Tile::new(1).with_objects(ObjectGroup::new(2)
            .with(Object::ellipse(1, 5.63638, 5.45456, 19.2727, 24.3636))
        ))
        .with_tile(Tile::new(2).with_objects(ObjectGroup::new(2)
            .with(Object::polygon(1, 23.4545, 6.54545, [(0.0, 0.0), (-17.8182, 21.0909), (0.363636, 21.4545)]))
            .with(Object::rect(2, 7.0, 6.0, 17.0, 24.0))
        ))
        .with_tile(Tile::new(12).with_objects(ObjectGroup::new(2)
            .with(Object::rect(1, 7.0, 7.0, 17.0, 23.0).with_rotation(45.0))
        ));

    for (id, x, y, width, height) in BODY_BOXES {
        tileset.tile_mut_or_insert(id).object_group = Some(ObjectGroup::new(2)
            .with(Object::rect(1, x, y, width, height)));
    }

    let wang_set = test_wang_set();
    let copy = wang_set.duplicate("Copy of test set");
    tileset
        .with_wang_set(wang_set)
        .with_wang_set(copy)
}

fn test_wang_set() -> WangSet {
    [
        ("", Color::rgb(0x20, 0xff, 0x54)),
        ("", Color::rgb(0x00, 0xff, 0x00)),
        ("", Color::rgb(0x00, 0x00, 0xff)),
        ("", Color::rgb(0xff, 0x77, 0x00)),
        ("", Color::rgb(0x00, 0xe9, 0xff)),
        ("what the heck is this", Color::rgb(0xff, 0x00, 0xd8)),
    ]
    .into_iter()
    .fold(WangSet::new("test set", WangSetKind::Mixed), |set, (name, color)| {
        set.with_color(WangColor::new(name, color))
    })
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use super::test_tileset;
    use crate::{ObjectShape, WangSetKind};

    #[test]
    fn every_tile_has_collision() {
        let tileset = test_tileset();
        assert_eq!(16, tileset.tiles.len());
        for id in 0..tileset.tile_count {
            let tile = tileset.tile(id).unwrap();
            assert!(!tile.objects().is_empty(), "tile {id}");
        }
    }

    #[test]
    fn shapes() {
        let tileset = test_tileset();
        let tile0 = tileset.tile(0).unwrap();
        assert_eq!(4, tile0.object_group.as_ref().unwrap().id);
        assert_eq!("AABB", tile0.objects()[0].name);
        assert!(matches!(tile0.objects()[1].shape, ObjectShape::Polygon(ref points) if points.len() == 3));

        let tile1 = tileset.tile(1).unwrap();
        assert_eq!(ObjectShape::Ellipse, tile1.objects()[0].shape);
        assert_eq!(Vec2::new(19.2727, 24.3636), tile1.objects()[0].size);

        let tile12 = tileset.tile(12).unwrap();
        assert_eq!(45.0, tile12.objects()[0].rotation);

        let tile10 = tileset.tile(10).unwrap();
        assert_eq!(Vec2::splat(32.0), tile10.objects()[0].size);
    }

    #[test]
    fn wang_sets() {
        let tileset = test_tileset();
        assert_eq!(2, tileset.wang_sets.len());
        assert_eq!("test set", tileset.wang_sets[0].name);
        assert_eq!("Copy of test set", tileset.wang_sets[1].name);
        for set in &tileset.wang_sets {
            assert_eq!(WangSetKind::Mixed, set.kind);
            assert_eq!(None, set.tile);
            assert_eq!(6, set.colors.len());
            assert_eq!("what the heck is this", set.colors[5].name);
            assert!(set.colors.iter().all(|c| c.tile.is_none() && c.probability == 1.0));
        }
    }
}
