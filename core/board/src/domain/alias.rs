//! 型別別名

/// 棋盤座標分量（file 或 rank），可為負數
pub type Coord = i32;

/// 棋子在己方配置表中的槽位
pub type SlotIndex = u8;
