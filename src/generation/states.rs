//! State-space generation: 128 block states and their render geometry

use crate::block::{Block, BlockModel, BlockState, Cuboid};
use crate::direction::{Direction, DirectionSet};
use crate::texture::Texture;

use super::config::FireConfig;

/// Build the block definition: one state per direction subset and
/// activity value, every state sharing the same trigger sheet.
pub fn build_block(config: &FireConfig, sheet_id: &str, texture: &Texture) -> Block {
    let mut block = Block::new(config.block_id());

    for connectivity in DirectionSet::combinations() {
        for active in [false, true] {
            let mut state = BlockState::new(connectivity, active, sheet_id);

            if active {
                state.light = Some(config.active_light);
                state.model = active_model(connectivity, texture);
            }

            // The lone catalog-visible variant: resting on the ground,
            // not yet lit.
            if !active && connectivity == DirectionSet::only(Direction::Down) {
                state.catalog_hidden = false;
            }

            block.push_state(state);
        }
    }

    block
}

/// Flame geometry for an active state: one wall cuboid per lit side with
/// the inward face textured; `down` renders as a centered two-cuboid
/// cross instead of a wall.
fn active_model(connectivity: DirectionSet, texture: &Texture) -> BlockModel {
    let mut model = BlockModel::new(true);

    if connectivity.contains(Direction::North) {
        model.push(wall(Direction::North, [0, 0, 1, 16, 16, 1], texture));
    }
    if connectivity.contains(Direction::South) {
        model.push(wall(Direction::South, [0, 0, 15, 16, 16, 15], texture));
    }
    if connectivity.contains(Direction::East) {
        model.push(wall(Direction::East, [15, 0, 0, 15, 16, 16], texture));
    }
    if connectivity.contains(Direction::West) {
        model.push(wall(Direction::West, [1, 0, 0, 1, 16, 16], texture));
    }
    if connectivity.contains(Direction::Down) {
        let mut lengthwise = Cuboid::new([8, 0, 0, 8, 16, 16]);
        lengthwise.set_face(Direction::East, texture.handle());
        lengthwise.set_face(Direction::West, texture.handle());
        model.push(lengthwise);

        let mut crosswise = Cuboid::new([0, 0, 8, 16, 16, 8]);
        crosswise.set_face(Direction::North, texture.handle());
        crosswise.set_face(Direction::South, texture.handle());
        model.push(crosswise);
    }
    if connectivity.contains(Direction::Up) {
        model.push(wall(Direction::Up, [0, 15, 0, 16, 15, 16], texture));
    }

    model
}

/// Wall plane against the given side, textured on its inward face.
fn wall(side: Direction, bounds: [i32; 6], texture: &Texture) -> Cuboid {
    let mut cuboid = Cuboid::new(bounds);
    cuboid.set_face(side.opposite(), texture.handle());
    cuboid
}
