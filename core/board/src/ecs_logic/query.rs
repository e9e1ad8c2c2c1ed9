use super::missing_resource;
use crate::domain::core_types::{BoardState, Piece, PieceId};
use crate::ecs_types::components::{Material, Owner, PieceSlot, Position};
use crate::ecs_types::resources::{LegalMoves, Selection};
use crate::error::Result;
use bevy_ecs::prelude::{Entity, World};

/// 將所有棋子 Entity 轉為棋盤快照
pub fn get_board_state(world: &mut World) -> Result<BoardState> {
    let pieces: Vec<Piece> = world
        .query::<(&Owner, &PieceSlot, &Material, &Position)>()
        .iter(world)
        .map(|(owner, slot, material, position)| {
            Piece::new(
                PieceId {
                    owner: *owner,
                    slot: slot.0,
                },
                *material,
                *position,
            )
        })
        .collect();

    BoardState::from_pieces(pieces)
}

/// 取得目前選取
pub fn get_selection(world: &World) -> Result<Selection> {
    world
        .get_resource::<Selection>()
        .copied()
        .ok_or_else(|| missing_resource::<Selection>().into())
}

/// 取得目前提示的合法落點
pub fn get_legal_moves(world: &World) -> Result<LegalMoves> {
    world
        .get_resource::<LegalMoves>()
        .cloned()
        .ok_or_else(|| missing_resource::<LegalMoves>().into())
}

/// 找出棋子對應的 Entity
pub fn find_piece_entity(world: &mut World, id: PieceId) -> Option<Entity> {
    world
        .query::<(Entity, &Owner, &PieceSlot)>()
        .iter(world)
        .find(|(_, owner, slot)| **owner == id.owner && slot.0 == id.slot)
        .map(|(entity, _, _)| entity)
}
