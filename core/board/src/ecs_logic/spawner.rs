use super::missing_resource;
use crate::ecs_types::components::{PieceBundle, PieceSlot};
use crate::ecs_types::resources::{LegalMoves, MatchSetup, Selection};
use crate::error::{Context, Result};
use crate::logic::setup::initial_board;
use bevy_ecs::prelude::World;
use tracing::debug;

/// 依 MatchSetup 生成對局的所有棋子 Entity，並重設選取狀態
pub fn spawn_match(world: &mut World) -> Result<()> {
    // 第一階段：借用 MatchSetup，先建出開局棋盤（同時驗證佈置）
    let board = {
        let setup = world
            .get_resource::<MatchSetup>()
            .ok_or_else(missing_resource::<MatchSetup>)?;
        initial_board(setup).context("建立開局棋盤")?
    };

    // 第二階段：MatchSetup 借用已結束，可以可變借用 world 進行 spawn
    for piece in board.pieces() {
        world.spawn(PieceBundle {
            position: piece.position(),
            material: piece.material(),
            owner: piece.owner(),
            slot: PieceSlot(piece.id().slot),
        });
    }

    world.insert_resource(Selection::default());
    world.insert_resource(LegalMoves::default());

    debug!(pieces = board.len(), "match spawned");
    Ok(())
}
